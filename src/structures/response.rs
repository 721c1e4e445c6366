use download_async::http::StatusCode;

/// A Response to a request made against a `RemoteSource`.
#[derive(Debug)]
pub struct Response {
  pub status: StatusCode,
  pub body: Vec<u8>,
}
