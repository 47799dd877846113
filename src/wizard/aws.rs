use super::{Created, Creator};
use crate::error::Result;
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;

impl Creator<'_> {
    /// AWS IAM access key. The secret access key is always typed in.
    pub(super) fn create_aws(&mut self) -> Result<Created> {
        self.header("Creating AWS credentials ...")?;
        let account = self.ask_required(
            "Please enter the AWS Account this key belongs to",
            "Account",
        )?;
        let username = self.ask_required(
            "Please enter the name of the AWS IAM User this key belongs to",
            "Username",
        )?;
        let accesskey = self
            .prompter
            .ask_string("Please enter the Access Key ID (AWS_ACCESS_KEY_ID)", "")?;
        let secretkey = self
            .prompter
            .ask_password("Please enter the Secret Access Key (AWS_SECRET_ACCESS_KEY)")?;
        let region =
            self.ask_optional("Please enter the default Region (AWS_DEFAULT_REGION) (optional)")?;

        let name = self.secret_name(WizardKind::AwsIam, &[&account, &username])?;

        let mut sec = Secret::new(secretkey.as_str(), None);
        sec.set_field("account", &account)?;
        sec.set_field("username", &username)?;
        sec.set_field("accesskey", &accesskey)?;
        sec.set_field("region", &region)?;
        self.commit(&name, &sec)?;

        Ok(Created {
            kind: WizardKind::AwsIam,
            name,
            generated: false,
        })
    }
}
