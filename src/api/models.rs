use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    pub status: StatusCode,
    pub body: String,
}

impl UpdateResponse {
    pub fn is_failure(&self) -> bool {
        self.status.as_u16() >= 400
    }

    /// Status line text such as `"404 Not Found"`.
    pub fn status_text(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: u16) -> UpdateResponse {
        UpdateResponse {
            status: StatusCode::from_u16(code).unwrap(),
            body: String::new(),
        }
    }

    #[test]
    fn test_failure_threshold() {
        assert!(!response(200).is_failure());
        assert!(!response(302).is_failure());
        assert!(response(400).is_failure());
        assert!(response(503).is_failure());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(response(404).status_text(), "404 Not Found");
        assert_eq!(response(599).status_text(), "599");
    }
}
