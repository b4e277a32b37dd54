use secrecy::{ExposeSecret, Secret};
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Body of the password update request: `{"oldPassword": .., "newPassword": ..}`.
#[derive(Debug)]
pub struct PasswordUpdate {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
}

impl Serialize for PasswordUpdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PasswordUpdate", 2)?;
        state.serialize_field("oldPassword", self.old_password.expose_secret())?;
        state.serialize_field("newPassword", self.new_password.expose_secret())?;
        state.end()
    }
}
