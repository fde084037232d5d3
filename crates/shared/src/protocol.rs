use serde::{Deserialize, Serialize};

use crate::domain::{EnquiryForm, Requirement};

/// Outbound enquiry body. Key names are fixed by the backend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquirySubmission {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub requirement: Requirement,
    pub address: String,
    pub message: String,
}

impl From<&EnquiryForm> for EnquirySubmission {
    fn from(form: &EnquiryForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            requirement: form.requirement,
            address: form.address.clone(),
            message: form.message.clone(),
        }
    }
}

/// Backend acknowledgement. `message` is carried for diagnostic logging
/// only and is never rendered to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnquiryAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let form = EnquiryForm {
            full_name: "Jane Doe".to_string(),
            phone: "+91 9876543210".to_string(),
            requirement: Requirement::Double,
            address: "Hostel A".to_string(),
            ..EnquiryForm::default()
        };

        let value = serde_json::to_value(EnquirySubmission::from(&form)).expect("serialize");
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["phone"], "+91 9876543210");
        assert_eq!(value["email"], "");
        assert_eq!(value["requirement"], "Double");
        assert_eq!(value["address"], "Hostel A");
        assert_eq!(value["message"], "");
    }

    #[test]
    fn ack_tolerates_missing_message() {
        let ack: EnquiryAck = serde_json::from_str(r#"{"success":true}"#).expect("parse");
        assert!(ack.success);
        assert!(ack.message.is_none());

        let ack: EnquiryAck =
            serde_json::from_str(r#"{"success":false,"message":"duplicate"}"#).expect("parse");
        assert!(!ack.success);
        assert_eq!(ack.message.as_deref(), Some("duplicate"));
    }
}
