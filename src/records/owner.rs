// SPDX-License-Identifier: MPL-2.0
//! Store owners and the validation rules of the add-owner form.

use super::{contains_ignore_case, Searchable};
use std::collections::BTreeMap;

/// Username length bounds, in characters.
pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 50;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// A store owner registered on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// National registration card number.
    pub nrc: String,
}

/// Form fields of an owner, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OwnerField {
    Name,
    Username,
    Email,
    Password,
    Address,
    Phone,
    Nrc,
}

impl OwnerField {
    /// All fields of the add-owner form.
    pub const ALL: [OwnerField; 7] = [
        OwnerField::Name,
        OwnerField::Username,
        OwnerField::Email,
        OwnerField::Password,
        OwnerField::Address,
        OwnerField::Phone,
        OwnerField::Nrc,
    ];

    /// Fields that can be changed from the details dialog.
    pub const EDITABLE: [OwnerField; 5] = [
        OwnerField::Name,
        OwnerField::Email,
        OwnerField::Phone,
        OwnerField::Nrc,
        OwnerField::Address,
    ];

    /// Returns the i18n key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            OwnerField::Name => "owner-field-name",
            OwnerField::Username => "owner-field-username",
            OwnerField::Email => "owner-field-email",
            OwnerField::Password => "owner-field-password",
            OwnerField::Address => "owner-field-address",
            OwnerField::Phone => "owner-field-phone",
            OwnerField::Nrc => "owner-field-nrc",
        }
    }

    /// Returns the i18n key of the input placeholder.
    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            OwnerField::Name => "owner-placeholder-name",
            OwnerField::Username => "owner-placeholder-username",
            OwnerField::Email => "owner-placeholder-email",
            OwnerField::Password => "owner-placeholder-password",
            OwnerField::Address => "owner-placeholder-address",
            OwnerField::Phone => "owner-placeholder-phone",
            OwnerField::Nrc => "owner-placeholder-nrc",
        }
    }

    /// Returns the i18n key of the helper text shown under the input, if any.
    #[must_use]
    pub fn hint_key(self) -> Option<&'static str> {
        match self {
            OwnerField::Username => Some("owner-hint-username"),
            OwnerField::Password => Some("owner-hint-password"),
            _ => None,
        }
    }

    /// Checks a single value, returning the i18n key of the problem.
    #[must_use]
    pub fn check(self, value: &str) -> Option<&'static str> {
        let len = value.chars().count();
        match self {
            OwnerField::Name if value.trim().is_empty() => Some("owner-error-name-required"),
            OwnerField::Username if len < USERNAME_MIN_LEN => Some("owner-error-username-short"),
            OwnerField::Username if len > USERNAME_MAX_LEN => Some("owner-error-username-long"),
            OwnerField::Email if !is_valid_email(value) => Some("owner-error-email-invalid"),
            OwnerField::Password if len < PASSWORD_MIN_LEN => Some("owner-error-password-short"),
            OwnerField::Address if value.trim().is_empty() => {
                Some("owner-error-address-required")
            }
            OwnerField::Phone if value.trim().is_empty() => Some("owner-error-phone-required"),
            OwnerField::Nrc if value.trim().is_empty() => Some("owner-error-nrc-required"),
            _ => None,
        }
    }
}

/// Per-field validation problems, as i18n keys.
pub type FieldErrors = BTreeMap<OwnerField, &'static str>;

/// Returns whether `value` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

impl Owner {
    /// Returns the value of `field`; the password is never stored.
    #[must_use]
    pub fn get(&self, field: OwnerField) -> &str {
        match field {
            OwnerField::Name => &self.name,
            OwnerField::Username => &self.username,
            OwnerField::Email => &self.email,
            OwnerField::Password => "",
            OwnerField::Address => &self.address,
            OwnerField::Phone => &self.phone,
            OwnerField::Nrc => &self.nrc,
        }
    }

    /// Updates one of the [`OwnerField::EDITABLE`] fields. Other fields are
    /// left untouched.
    pub fn set(&mut self, field: OwnerField, value: String) {
        match field {
            OwnerField::Name => self.name = value,
            OwnerField::Email => self.email = value,
            OwnerField::Address => self.address = value,
            OwnerField::Phone => self.phone = value,
            OwnerField::Nrc => self.nrc = value,
            OwnerField::Username | OwnerField::Password => {}
        }
    }

    /// Validates the editable fields.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        collect_errors(OwnerField::EDITABLE.iter().map(|&f| (f, self.get(f))))
    }

    /// Returns the uppercase first letter of the name, used as avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Demo owners shown before any backend is connected.
    #[must_use]
    pub fn seed() -> Vec<Owner> {
        [
            ("User 1", "user1", "+1234567890", "123 Main St, City, Country", "1234567890"),
            ("User 2", "user2", "+0987654321", "456 Elm St, Town, Country", "0987654321"),
            ("User 3", "user3", "+1122334455", "789 Oak St, Village, Country", "1122334455"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, username, phone, address, nrc), id)| Owner {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{username}@openecommerce.com"),
            phone: phone.to_string(),
            address: address.to_string(),
            nrc: nrc.to_string(),
        })
        .collect()
    }
}

impl Searchable for Owner {
    fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
            || contains_ignore_case(&self.username, term)
            || contains_ignore_case(&self.email, term)
            || self.phone.contains(term)
    }
}

/// Values typed into the add-owner form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
    pub nrc: String,
}

impl OwnerDraft {
    #[must_use]
    pub fn get(&self, field: OwnerField) -> &str {
        match field {
            OwnerField::Name => &self.name,
            OwnerField::Username => &self.username,
            OwnerField::Email => &self.email,
            OwnerField::Password => &self.password,
            OwnerField::Address => &self.address,
            OwnerField::Phone => &self.phone,
            OwnerField::Nrc => &self.nrc,
        }
    }

    pub fn set(&mut self, field: OwnerField, value: String) {
        let slot = match field {
            OwnerField::Name => &mut self.name,
            OwnerField::Username => &mut self.username,
            OwnerField::Email => &mut self.email,
            OwnerField::Password => &mut self.password,
            OwnerField::Address => &mut self.address,
            OwnerField::Phone => &mut self.phone,
            OwnerField::Nrc => &mut self.nrc,
        };
        *slot = value;
    }

    /// Validates every field at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        collect_errors(OwnerField::ALL.iter().map(|&f| (f, self.get(f))))
    }

    /// Turns a validated draft into an owner record. The password is handed
    /// to the backend only and not kept.
    #[must_use]
    pub fn into_owner(self, id: u32) -> Owner {
        Owner {
            id,
            name: self.name.trim().to_string(),
            username: self.username,
            email: self.email,
            phone: self.phone,
            address: self.address,
            nrc: self.nrc,
        }
    }
}

fn collect_errors<'a>(
    values: impl Iterator<Item = (OwnerField, &'a str)>,
) -> Result<(), FieldErrors> {
    let errors: FieldErrors = values
        .filter_map(|(field, value)| field.check(value).map(|key| (field, key)))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> OwnerDraft {
        OwnerDraft {
            name: "Open E-Commerce".into(),
            username: "oec01".into(),
            email: "admin@openecommerce.com".into(),
            password: "correct-horse".into(),
            address: "123 U Wizara St, Yangon, Myanmar".into(),
            phone: "+1234567890".into(),
            nrc: "12/ABC(N)123456".into(),
        }
    }

    #[test]
    fn seed_matches_demo_data() {
        let owners = Owner::seed();
        assert_eq!(owners.len(), 3);
        assert_eq!(owners[0].id, 1);
        assert_eq!(owners[2].email, "user3@openecommerce.com");
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid_draft().validate(), Ok(()));
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = OwnerDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), OwnerField::ALL.len());
        assert_eq!(errors[&OwnerField::Name], "owner-error-name-required");
        assert_eq!(errors[&OwnerField::Username], "owner-error-username-short");
        assert_eq!(errors[&OwnerField::Email], "owner-error-email-invalid");
        assert_eq!(errors[&OwnerField::Password], "owner-error-password-short");
    }

    #[test]
    fn username_length_bounds() {
        assert_eq!(OwnerField::Username.check("abcd"), Some("owner-error-username-short"));
        assert_eq!(OwnerField::Username.check("abcde"), None);
        assert_eq!(OwnerField::Username.check(&"a".repeat(50)), None);
        assert_eq!(
            OwnerField::Username.check(&"a".repeat(51)),
            Some("owner-error-username-long")
        );
    }

    #[test]
    fn password_needs_eight_characters() {
        assert!(OwnerField::Password.check("1234567").is_some());
        assert!(OwnerField::Password.check("12345678").is_none());
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("user1@openecommerce.com"));
        assert!(is_valid_email("a.b@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn search_matches_name_username_email_and_phone() {
        let owner = &Owner::seed()[1];
        assert!(owner.matches("user 2"));
        assert!(owner.matches("user2@"));
        assert!(owner.matches("0987"));
        assert!(!owner.matches("elm st"));
    }

    #[test]
    fn editing_ignores_username() {
        let mut owner = Owner::seed().remove(0);
        owner.set(OwnerField::Username, "renamed".into());
        owner.set(OwnerField::Phone, "+999".into());

        assert_eq!(owner.username, "user1");
        assert_eq!(owner.phone, "+999");
    }

    #[test]
    fn edited_owner_is_revalidated() {
        let mut owner = Owner::seed().remove(0);
        owner.set(OwnerField::Email, "nope".into());

        let errors = owner.validate().unwrap_err();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), [OwnerField::Email]);
    }

    #[test]
    fn draft_becomes_owner_without_password() {
        let owner = valid_draft().into_owner(4);
        assert_eq!(owner.id, 4);
        assert_eq!(owner.username, "oec01");
        assert_eq!(owner.get(OwnerField::Password), "");
        assert_eq!(owner.initial(), "O");
    }
}
