//! The closed set of secret types the wizard can create.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WizardKind {
    /// Website login (URL, username, password)
    Website,
    /// Numerical PIN code
    Pin,
    /// Generic secret with free-form key/value pairs
    Generic,
    /// AWS IAM access key
    AwsIam,
    /// GCP service-account key file
    GcpServiceAccount,
}

impl WizardKind {
    /// Menu order.
    pub const ALL: [WizardKind; 5] = [
        WizardKind::Website,
        WizardKind::Pin,
        WizardKind::Generic,
        WizardKind::AwsIam,
        WizardKind::GcpServiceAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WizardKind::Website => "Website Login",
            WizardKind::Pin => "PIN Code (numerical)",
            WizardKind::Generic => "Generic",
            WizardKind::AwsIam => "AWS Secret Key",
            WizardKind::GcpServiceAccount => "GCP Service Account",
        }
    }

    /// Fixed leading segments of every name of this kind.
    pub fn name_root(self) -> &'static str {
        match self {
            WizardKind::Website => "websites",
            WizardKind::Pin => "pins",
            WizardKind::Generic => "misc",
            WizardKind::AwsIam => "aws/iam",
            WizardKind::GcpServiceAccount => "gcp/iam",
        }
    }

    /// Whether this kind can generate its value (and so may print or copy it).
    pub fn generates_value(self) -> bool {
        matches!(
            self,
            WizardKind::Website | WizardKind::Pin | WizardKind::Generic
        )
    }
}

impl std::fmt::Display for WizardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
