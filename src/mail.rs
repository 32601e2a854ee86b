use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Value of the form control's `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Values typed into the contact form. Lives only as long as the contact view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI that pre-fills the visitor's mail client.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        )
    }
}

/// Percent-encodes `input` the way ECMAScript's `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> String {
        let bytes = s.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).unwrap()
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let (_, query) = uri.split_once('?').unwrap();
        query
            .split('&')
            .find_map(|kv| kv.strip_prefix(key)?.strip_prefix('='))
            .unwrap()
    }

    fn ada() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Hi there");
        form
    }

    #[test]
    fn test_mailto_round_trip() {
        let uri = ada().mailto("me@example.com");

        assert!(uri.starts_with("mailto:me@example.com?"));
        assert_eq!(decode(query_param(&uri, "subject")), "Hello");
        assert_eq!(
            decode(query_param(&uri, "body")),
            "Name: Ada\nEmail: ada@example.com\n\nHi there"
        );
    }

    #[test]
    fn test_mailto_exact() {
        let uri = ada().mailto("me@example.com");
        assert_eq!(
            uri,
            "mailto:me@example.com?subject=Hello&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AHi%20there"
        );
    }

    #[test]
    fn test_field_isolation() {
        let mut form = ada();
        form.set(Field::Name, "Grace");

        assert_eq!(form.get(Field::Name), "Grace");
        assert_eq!(form.get(Field::Email), "ada@example.com");
        assert_eq!(form.get(Field::Subject), "Hello");
        assert_eq!(form.get(Field::Message), "Hi there");
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::default();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
        assert_eq!(form.body(), "Name: \nEmail: \n\n");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abcXYZ019"), "abcXYZ019");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("a&b=c?d#e/f"), "a%26b%3Dc%3Fd%23e%2Ff");
        assert_eq!(encode_uri_component("50% + 1"), "50%25%20%2B%201");
        assert_eq!(encode_uri_component("line\r\nbreak"), "line%0D%0Abreak");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("🎮"), "%F0%9F%8E%AE");
        assert_eq!(encode_uri_component(""), "");
    }

    #[test]
    fn test_subject_with_reserved_characters() {
        let mut form = ada();
        form.set(Field::Subject, "Q&A: rates?");
        let uri = form.mailto("me@example.com");

        assert_eq!(query_param(&uri, "subject"), "Q%26A%3A%20rates%3F");
        assert_eq!(decode(query_param(&uri, "subject")), "Q&A: rates?");
    }
}
