/// Backend storage types, as declared by the schema.
///
/// Trellis never executes storage queries itself; it carries the storage
/// type only so callers can express projection policy (some backends
/// cannot select certain storage classes as the sole bare column of a
/// query).
#[derive(Debug, Clone, PartialEq)]
pub enum StorageType {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A 64-bit integer stored through the backend's big-integer path
    BigInt,

    /// A double-precision float
    Float,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Unconstrained binary type
    Blob,

    /// JSON document stored as a blob
    Json,

    /// An instant in time
    Timestamp,

    /// User-specified unrecognized type
    Custom(String),
}
