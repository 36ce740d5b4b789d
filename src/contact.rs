use thiserror::Error;

/// Percent-encoded newline, used between body lines.
const LINE_BREAK: &str = "%0A";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("mail client handoff failed: {0}")]
    Handoff(String),
}

/// Current contents of the contact form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    /// Builds the `mailto:` URI for this draft.
    pub fn mailto_href(&self, address: &str) -> String {
        let subject = self.subject();
        let subject = urlencoding::encode(&subject);
        let name = urlencoding::encode(&self.name);
        let email = urlencoding::encode(&self.email);
        let message = urlencoding::encode(&self.message);
        format!(
            "mailto:{address}?subject={subject}&body=Name%3A%20{name}{br}Email%3A%20{email}{br}{br}{message}",
            br = LINE_BREAK,
        )
    }
}

/// Hands the draft off to the user's mail client by navigating to its `mailto:` URI.
pub fn hand_off(draft: &ContactDraft, address: &str) -> Result<(), ContactError> {
    let href = draft.mailto_href(address);
    leptos::prelude::window()
        .location()
        .set_href(&href)
        .map_err(|e| ContactError::Handoff(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "someone@example.com";

    fn split_href(href: &str) -> (String, String, String) {
        let rest = href.strip_prefix("mailto:").expect("should be a mailto uri");
        let (to, query) = rest.split_once('?').expect("should have a query");
        let (subject, body) = query
            .strip_prefix("subject=")
            .and_then(|q| q.split_once("&body="))
            .expect("should have subject then body");
        let decode = |s: &str| {
            urlencoding::decode(s)
                .expect("should be valid utf-8")
                .into_owned()
        };
        (to.to_string(), decode(subject), decode(body))
    }

    #[test]
    fn test_mailto_layout() {
        let draft = ContactDraft {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hi".to_string(),
        };
        let (to, subject, body) = split_href(&draft.mailto_href(ADDRESS));
        assert_eq!(to, ADDRESS);
        assert_eq!(subject, "Contact from Ana");
        assert_eq!(body, "Name: Ana\nEmail: ana@example.com\n\nHi");
        let lines = body.lines().collect::<Vec<_>>();
        assert_eq!(lines, vec!["Name: Ana", "Email: ana@example.com", "", "Hi"]);
    }

    #[test]
    fn test_fields_are_encoded() {
        let draft = ContactDraft {
            name: "Jo & Co".to_string(),
            email: "jo+co@example.com".to_string(),
            message: "a=b?\nsecond line #1".to_string(),
        };
        let href = draft.mailto_href(ADDRESS);
        let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
        // exactly one parameter separator survives encoding
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains(' '));
        assert!(!query.contains('#'));

        let (_, subject, body) = split_href(&href);
        assert_eq!(subject, "Contact from Jo & Co");
        assert_eq!(
            body,
            "Name: Jo & Co\nEmail: jo+co@example.com\n\na=b?\nsecond line #1"
        );
    }

    #[test]
    fn test_empty_draft_still_builds() {
        let (to, subject, body) = split_href(&ContactDraft::default().mailto_href(ADDRESS));
        assert_eq!(to, ADDRESS);
        assert_eq!(subject, "Contact from ");
        assert_eq!(body, "Name: \nEmail: \n\n");
    }

    #[test]
    fn test_unicode_round_trips() {
        let draft = ContactDraft {
            name: "Mãe".to_string(),
            email: "mae@example.com".to_string(),
            message: "Olá 👋".to_string(),
        };
        let (_, subject, body) = split_href(&draft.mailto_href(ADDRESS));
        assert_eq!(subject, "Contact from Mãe");
        assert!(body.ends_with("Olá 👋"));
    }
}
