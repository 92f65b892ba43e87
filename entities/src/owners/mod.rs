use shared_kernel::non_empty_string;

non_empty_string!(OwnerName);
non_empty_string!(OwnerEmailInner);
non_empty_string!(OwnerExternalId);

#[derive(Clone, Debug)]
pub struct OwnerEmail(OwnerEmailInner);

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl TryFrom<String> for OwnerEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_email;
        let non_empty_string = OwnerEmailInner::try_from(value)?;

        let is_valid = validate_email(non_empty_string.as_ref());
        if is_valid {
            return Ok(OwnerEmail(non_empty_string));
        }
        Err(format!("{} is an invalid email", non_empty_string.as_ref()))
    }
}

#[derive(Debug)]
pub struct OwnerDetails {
    pub name: OwnerName,
    pub email: OwnerEmail,
    pub external_id: OwnerExternalId,
}
