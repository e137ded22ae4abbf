//! Predefined metric names recorded by the request pipeline.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// HTTP status code of the final response.
    StatusCode,
    AWSErrorCode,
    AWSRequestID,
    BytesProcessed,
    AttemptCount,
    ResponseProcessingTime,
    ClientExecuteTime,
    RequestSigningTime,
    HttpRequestTime,
    RequestMarshallTime,
    RetryPauseTime,
    RedirectLocation,
    Exception,
    CredentialsRequestTime,
    ServiceEndpoint,
    ServiceName,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::StatusCode => "StatusCode",
            Field::AWSErrorCode => "AWSErrorCode",
            Field::AWSRequestID => "AWSRequestID",
            Field::BytesProcessed => "BytesProcessed",
            Field::AttemptCount => "AttemptCount",
            Field::ResponseProcessingTime => "ResponseProcessingTime",
            Field::ClientExecuteTime => "ClientExecuteTime",
            Field::RequestSigningTime => "RequestSigningTime",
            Field::HttpRequestTime => "HttpRequestTime",
            Field::RequestMarshallTime => "RequestMarshallTime",
            Field::RetryPauseTime => "RetryPauseTime",
            Field::RedirectLocation => "RedirectLocation",
            Field::Exception => "Exception",
            Field::CredentialsRequestTime => "CredentialsRequestTime",
            Field::ServiceEndpoint => "ServiceEndpoint",
            Field::ServiceName => "ServiceName",
        }
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
