// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that may occur while keeping updates in sync.

use std::{fmt, io};
use updsync_session::StoreError;

/// The error type reported by the server when a request is misused.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,
    /// The ASCII error name, normally in screaming snake case.
    ///
    /// Digit words are removed from the name and put in the [`RpcError::value`] instead.
    /// ```
    /// use updsync_client::RpcError;
    /// let rpc_error = RpcError::new(420, "FLOOD_WAIT_31");
    /// assert_eq!(rpc_error.name, "FLOOD_WAIT");
    /// assert_eq!(rpc_error.value, Some(31));
    /// ```
    pub name: String,
    /// If the error contained an additional integer value, it will be present here and removed from the [`RpcError::name`].
    pub value: Option<u32>,
    /// The name of the request that triggered this error, if known.
    pub caused_by: Option<&'static str>,
}

impl std::error::Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.name)?;
        if let Some(caused_by) = self.caused_by {
            write!(f, " caused by {caused_by}")?;
        }
        if let Some(value) = self.value {
            write!(f, " (value: {value})")?;
        }
        Ok(())
    }
}

impl RpcError {
    /// Builds an error from the code and raw message sent by the server.
    pub fn new(code: i32, message: &str) -> Self {
        // Extract the numeric value in the error, if any
        if let Some((value, parsed_value)) = message
            .split(|c: char| !c.is_ascii_digit())
            .flat_map(|value| {
                value
                    .parse::<u32>()
                    .map(|parsed_value| (value, parsed_value))
            })
            .next()
        {
            let mut to_remove = String::with_capacity(1 + value.len());
            to_remove.push('_');
            to_remove.push_str(value);
            Self {
                code,
                name: message.replace(&to_remove, ""),
                value: Some(parsed_value),
                caused_by: None,
            }
        } else {
            Self {
                code,
                name: message.to_string(),
                value: None,
                caused_by: None,
            }
        }
    }

    /// Matches on the name of the RPC error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error name starts (or ends with) the input parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(updsync_client::RpcError::new(400, "CHANNEL_PRIVATE"));
    /// #
    /// match request_result {
    ///     Err(rpc_err) if rpc_err.is("SESSION_PASSWORD_NEEDED") => panic!(),
    ///     Err(rpc_err) if rpc_err.is("CHANNEL_*") => {},
    ///     _ => panic!()
    /// }
    /// ```
    pub fn is(&self, rpc_error: &str) -> bool {
        if let Some(rpc_error) = rpc_error.strip_suffix('*') {
            self.name.starts_with(rpc_error)
        } else if let Some(rpc_error) = rpc_error.strip_prefix('*') {
            self.name.ends_with(rpc_error)
        } else {
            self.name == rpc_error
        }
    }

    /// Attaches the name of the request that caused this error to the error information.
    pub fn with_caused_by(mut self, request: &'static str) -> Self {
        self.caused_by = Some(request);
        self
    }
}

/// This error occurs when a Remote Procedure call was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// The request invocation failed because it was invalid or the server
    /// could not process it successfully. If the server is suffering from
    /// temporary issues, the request may be retried after some time.
    Rpc(RpcError),
    /// Standard I/O error when sending the request or reading the response.
    Io(io::Error),
    /// The request was cancelled or dropped, and the results won't arrive.
    Dropped,
    /// The response did not arrive within the configured request timeout.
    Timeout,
}

impl std::error::Error for InvocationError {}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(err) => write!(f, "request error: {err}"),
            Self::Io(err) => write!(f, "request error: {err}"),
            Self::Dropped => write!(f, "request error: dropped (cancelled)"),
            Self::Timeout => write!(f, "request error: timed out"),
        }
    }
}

impl From<RpcError> for InvocationError {
    fn from(error: RpcError) -> Self {
        Self::Rpc(error)
    }
}

impl From<io::Error> for InvocationError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl InvocationError {
    /// Matches on the name of the RPC error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error name starts (or ends with) the input parameter.
    ///
    /// If the error is not a RPC error, returns `false`.
    #[inline]
    pub fn is(&self, rpc_error: &str) -> bool {
        match self {
            Self::Rpc(rpc) => rpc.is(rpc_error),
            _ => false,
        }
    }
}

/// The server sent something this library does not know how to interpret.
///
/// This indicates a protocol or layer mismatch, and must not be silently ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum ProtocolError {
    /// An `Updates` constructor that is not a valid passive push.
    UnexpectedUpdates { name: &'static str },
    /// An `Updates` constructor with no known definition.
    UnknownUpdates { constructor_id: u32 },
    /// An `Update` constructor with no known definition.
    UnknownUpdate { constructor_id: u32 },
    /// A response of the wrong shape for the request that was made.
    UnexpectedResponse { request: &'static str },
}

impl std::error::Error for ProtocolError {}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedUpdates { name } => {
                write!(f, "protocol error: unexpected {name} outside of a response")
            }
            Self::UnknownUpdates { constructor_id } => {
                write!(f, "protocol error: unknown updates {constructor_id:08x}")
            }
            Self::UnknownUpdate { constructor_id } => {
                write!(f, "protocol error: unknown update {constructor_id:08x}")
            }
            Self::UnexpectedResponse { request } => {
                write!(f, "protocol error: unexpected response to {request}")
            }
        }
    }
}

/// This error occurs when updates could not be kept in sync.
#[derive(Debug)]
pub enum SyncError {
    /// The server sent something that could not be interpreted.
    Protocol(ProtocolError),
    /// A request needed to fill a gap failed.
    Invocation(InvocationError),
    /// The store could not be read or written.
    Store(StoreError),
    /// The channel's difference could not be fetched because its access hash is unknown.
    UnresolvableChannel { channel_id: i64 },
    /// The synchronizer has not been started yet.
    NotReady,
    /// The synchronizer was shut down.
    ShutDown,
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Protocol(err) => Some(err),
            Self::Invocation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protocol(err) => write!(f, "sync error: {err}"),
            Self::Invocation(err) => write!(f, "sync error: {err}"),
            Self::Store(err) => write!(f, "sync error, store failed: {err}"),
            Self::UnresolvableChannel { channel_id } => {
                write!(f, "sync error: access hash of channel {channel_id} is unknown")
            }
            Self::NotReady => write!(f, "sync error: not started"),
            Self::ShutDown => write!(f, "sync error: shut down"),
        }
    }
}

impl From<ProtocolError> for SyncError {
    fn from(error: ProtocolError) -> Self {
        Self::Protocol(error)
    }
}

impl From<InvocationError> for SyncError {
    fn from(error: InvocationError) -> Self {
        Self::Invocation(error)
    }
}

impl From<StoreError> for SyncError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}

impl SyncError {
    /// Matches on the name of the RPC error that caused this failure, if any.
    ///
    /// See [`RpcError::is`] for the accepted patterns.
    #[inline]
    pub fn is(&self, rpc_error: &str) -> bool {
        match self {
            Self::Invocation(err) => err.is(rpc_error),
            _ => false,
        }
    }
}
