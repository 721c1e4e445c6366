use download_async::http::StatusCode;

use crate::structures::Response;

impl Response {
  pub fn new(parts: download_async::http::response::Parts, body: Vec<u8>) -> Self {
    Self {
      status: parts.status,
      body
    }
  }

  pub fn with_status(status: StatusCode, body: Vec<u8>) -> Self {
    Self {
      status,
      body
    }
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(self.body.clone())
  }

  pub fn into_body(self) -> Vec<u8> {
    self.body
  }
}

