//! Command results.

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The command returns no data (writes, deletes, init)
    Unit,
    /// Raw bytes read from the ledger
    Bytes(Vec<u8>),
}

impl Output {
    /// Payload bytes; empty for [`Output::Unit`]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Unit => &[],
            Output::Bytes(bytes) => bytes,
        }
    }

    /// Convert into the payload returned by the invoke entry point
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            Output::Unit => Vec::new(),
            Output::Bytes(bytes) => bytes,
        }
    }
}
