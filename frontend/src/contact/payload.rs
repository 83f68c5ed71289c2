use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;
use crate::config::RelayEndpoint;
use crate::utils::relay::{RelayBody, RelayRequest};

/// Values currently typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// What gets sent for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl FormPayload {
    pub fn new(fields: &ContactFields, now: DateTime<Utc>) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("message".to_string(), self.message.clone()),
        ]
    }

    /// The forms relay receives the raw form fields; the script relay also
    /// gets the submission timestamp.
    pub fn into_request(self, endpoint: &RelayEndpoint) -> RelayRequest {
        match endpoint {
            RelayEndpoint::FormsRelay(url) => RelayRequest {
                url: url.clone(),
                headers: vec![("Accept", "application/json")],
                body: RelayBody::Multipart(self.form_fields()),
            },
            RelayEndpoint::ScriptRelay(url) => {
                let body = form_urlencoded::Serializer::new(String::new())
                    .append_pair("name", &self.name)
                    .append_pair("email", &self.email)
                    .append_pair("message", &self.message)
                    .append_pair("timestamp", &self.timestamp)
                    .finish();
                RelayRequest {
                    url: url.clone(),
                    headers: vec![("Content-Type", "application/x-www-form-urlencoded")],
                    body: RelayBody::UrlEncoded(body),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi & bye".to_string(),
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn timestamp_is_iso8601_with_millis() {
        let payload = FormPayload::new(&fields(), noon());
        assert_eq!(payload.timestamp, "2025-01-01T12:00:00.000Z");
    }

    #[test]
    fn forms_relay_gets_multipart_fields() {
        let endpoint = RelayEndpoint::FormsRelay("https://formspree.io/f/test".to_string());
        let request = FormPayload::new(&fields(), noon()).into_request(&endpoint);

        assert_eq!(request.url, "https://formspree.io/f/test");
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(
            request.body,
            RelayBody::Multipart(vec![
                ("name".to_string(), "Ada Lovelace".to_string()),
                ("email".to_string(), "ada@example.com".to_string()),
                ("message".to_string(), "Hi & bye".to_string()),
            ])
        );
    }

    #[test]
    fn script_relay_gets_urlencoded_fields_with_timestamp() {
        let endpoint = RelayEndpoint::ScriptRelay("https://script.google.com/macros/s/x/exec".to_string());
        let request = FormPayload::new(&fields(), noon()).into_request(&endpoint);

        assert_eq!(request.header("Content-Type"), Some("application/x-www-form-urlencoded"));
        assert_eq!(
            request.body,
            RelayBody::UrlEncoded(
                "name=Ada+Lovelace&email=ada%40example.com&message=Hi+%26+bye&timestamp=2025-01-01T12%3A00%3A00.000Z"
                    .to_string()
            )
        );
    }

    #[test]
    fn clear_empties_every_field() {
        let mut f = fields();
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
    }
}
