use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::cv::NewCv;
use crate::models::job::NewJob;
use chrono::Local;

pub const JOB_INITIAL_STATUS: &str = "Open";
pub const CV_INITIAL_STATUS: &str = "CV Shared";

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Display-toggle wrapper around a form draft. Closing does not reset the
/// draft; a failed submit keeps the entered values for correction.
#[derive(Debug, Default)]
pub struct ModalForm<T: Default> {
    open: bool,
    pub draft: T,
}

impl<T: Default> ModalForm<T> {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reset(&mut self) {
        self.draft = T::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub title: String,
    pub project: String,
    pub location: String,
    pub hiring_manager: String,
}

impl JobDraft {
    /// Build the POST payload, stamping the initial status and creation
    /// date client-side.
    pub fn payload(&self) -> Result<NewJob> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::Input("Job title is required".to_string()));
        }
        Ok(NewJob {
            title: title.to_string(),
            project: self.project.trim().to_string(),
            location: self.location.trim().to_string(),
            hiring_manager: self.hiring_manager.trim().to_string(),
            status: JOB_INITIAL_STATUS.to_string(),
            created_date: today(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CvDraft {
    pub job_id: String,
    pub candidate_name: String,
    pub position: String,
    pub project: String,
    pub interview_date: String,
}

impl CvDraft {
    pub fn payload(&self) -> Result<NewCv> {
        let candidate_name = self.candidate_name.trim();
        if candidate_name.is_empty() {
            return Err(Error::Input("Candidate name is required".to_string()));
        }
        Ok(NewCv {
            job_id: self.job_id.trim().to_string(),
            candidate_name: candidate_name.to_string(),
            position: self.position.trim().to_string(),
            project: self.project.trim().to_string(),
            interview_date: self.interview_date.trim().to_string(),
            status: CV_INITIAL_STATUS.to_string(),
            shared_date: today(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub current_location: String,
    pub nationality: String,
    pub notice_period: String,
}

impl CandidateDraft {
    pub fn payload(&self) -> Result<Candidate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Input("Candidate name is required".to_string()));
        }
        Ok(Candidate {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            current_location: self.current_location.trim().to_string(),
            nationality: self.nationality.trim().to_string(),
            notice_period: self.notice_period.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_payload_gets_default_status_and_creation_date() {
        let draft = JobDraft {
            title: " Senior Rust Engineer ".to_string(),
            project: "Apollo".to_string(),
            location: "Berlin".to_string(),
            hiring_manager: "Dana".to_string(),
        };
        let payload = draft.payload().unwrap();
        assert_eq!(payload.title, "Senior Rust Engineer");
        assert_eq!(payload.status, JOB_INITIAL_STATUS);
        assert_eq!(payload.created_date, today());
    }

    #[test]
    fn job_payload_requires_title() {
        let draft = JobDraft::default();
        assert!(draft.payload().is_err());
    }

    #[test]
    fn cv_payload_is_stamped_as_shared_today() {
        let draft = CvDraft {
            job_id: "J-1".to_string(),
            candidate_name: "Jane".to_string(),
            position: "Engineer".to_string(),
            project: "Apollo".to_string(),
            interview_date: String::new(),
        };
        let payload = draft.payload().unwrap();
        assert_eq!(payload.status, CV_INITIAL_STATUS);
        assert_eq!(payload.shared_date, today());
    }

    #[test]
    fn candidate_payload_requires_only_name() {
        let draft = CandidateDraft {
            name: "Jane".to_string(),
            ..Default::default()
        };
        let payload = draft.payload().unwrap();
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.email, "");
    }

    #[test]
    fn modal_close_keeps_draft_until_reset() {
        let mut form: ModalForm<JobDraft> = ModalForm::default();
        form.open();
        form.draft.title = "kept".to_string();
        form.close();
        assert!(!form.is_open());
        assert_eq!(form.draft.title, "kept");
        form.reset();
        assert_eq!(form.draft.title, "");
    }
}
