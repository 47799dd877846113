//! Centralized constants for defaults, charsets, permissions, and exit codes.

/// Directory name (under `$HOME`) used when no root is configured.
pub const DEFAULT_ROOT_DIR: &str = ".credwiz";

/// Environment variable overriding the store root.
pub const ROOT_ENV: &str = "CREDWIZ_ROOT";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CREDWIZ_LOG";

/// Configuration file name inside the store root.
pub const CONFIG_FILE: &str = "credwiz.toml";

/// Lock file serializing writes to the file store.
pub const STORE_LOCK_FILE: &str = "store.lock";

/// File extension for stored secret documents.
pub const SECRET_EXTENSION: &str = ".json";

/// Permission mode for store directories.
pub const STORE_DIR_MODE: u32 = 0o700;

/// Permission mode for secret documents.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Default length of a random charset password.
pub const DEFAULT_PASSWORD_LENGTH: usize = 24;

/// Default number of words in a passphrase.
pub const DEFAULT_PASSPHRASE_WORDS: usize = 4;

/// Default number of digits in a PIN.
pub const DEFAULT_PIN_LENGTH: usize = 4;

pub const CHARSET_ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const CHARSET_SYMBOLS: &str = "~!@#$%^&*()-_+={}[]\\|<,>.?/\"';:`";

pub const CHARSET_DIGITS: &str = "0123456789";

/// Maximum size of a service-account key file (1 MiB).
/// Upper bound for generated password length, PIN length and passphrase word count.
pub const MAX_GENERATED_LENGTH: usize = 4096;

pub const MAX_SERVICE_ACCOUNT_SIZE: u64 = 1_048_576;

/// Process exit codes, applied only in `main`.
pub const EXIT_GENERAL: u8 = 1;
pub const EXIT_VALIDATION: u8 = 2;
pub const EXIT_PARSE: u8 = 3;
pub const EXIT_IO: u8 = 4;
pub const EXIT_STORAGE: u8 = 5;
pub const EXIT_ABORTED: u8 = 130;
