//! Contact entity owning a collection of phone numbers.

use crate::domain::PhoneNumber;
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A person with a name and a collection of phone numbers.
///
/// The name fields are immutable after construction; the phone-number
/// collection is mutated only through [`add_phone_number`], [`remove_phone_number`],
/// and [`set_primary_phone_number`]. The collection preserves insertion order and
/// holds no duplicates (by value equality), and the primary number is always
/// either absent or a current member of the collection.
///
/// [`add_phone_number`]: Contact::add_phone_number
/// [`remove_phone_number`]: Contact::remove_phone_number
/// [`set_primary_phone_number`]: Contact::set_primary_phone_number
///
/// # Example
///
/// ```
/// use domain_utils::domain::PhoneNumber;
/// use domain_utils::models::Contact;
///
/// let mut contact = Contact::new("Anna").unwrap();
/// let phone = PhoneNumber::new("+71234567890").unwrap();
/// contact.add_phone_number(phone.clone());
/// assert_eq!(contact.primary_phone_number(), Some(&phone));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    first_name: String,
    middle_name: String,
    last_name: String,
    phone_numbers: Vec<PhoneNumber>,
    // Index into phone_numbers; re-derived on removal, never dangling.
    primary: Option<usize>,
}

impl Contact {
    /// Create a contact with a first name only.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::BlankFirstName` when the first name is
    /// empty or whitespace-only.
    pub fn new(first_name: impl Into<String>) -> ContactResult<Self> {
        Self::with_full_name(first_name, "", "")
    }

    /// Create a contact with first, middle, and last names.
    ///
    /// Middle and last names may be empty; the first name may not.
    pub fn with_full_name(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> ContactResult<Self> {
        let first_name = first_name.into();

        if first_name.trim().is_empty() {
            return Err(ContactError::BlankFirstName);
        }

        Ok(Self {
            first_name,
            middle_name: middle_name.into(),
            last_name: last_name.into(),
            phone_numbers: Vec::new(),
            primary: None,
        })
    }

    /// The contact's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The contact's middle name, or an empty string.
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    /// The contact's last name, or an empty string.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The non-empty name parts joined with single spaces.
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        for part in [&self.middle_name, &self.last_name] {
            if !part.is_empty() {
                name.push(' ');
                name.push_str(part);
            }
        }
        name
    }

    /// All phone numbers, in insertion order.
    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    /// The primary phone number, if the contact has any numbers.
    pub fn primary_phone_number(&self) -> Option<&PhoneNumber> {
        self.primary.map(|idx| &self.phone_numbers[idx])
    }

    /// Add a phone number to the contact.
    ///
    /// The first number added becomes primary. Adding a number already
    /// present (by value equality) is a silent no-op.
    pub fn add_phone_number(&mut self, value: PhoneNumber) {
        if self.phone_numbers.contains(&value) {
            return;
        }

        tracing::debug!(number = %value, "adding phone number");
        self.phone_numbers.push(value);

        if self.primary.is_none() {
            self.primary = Some(self.phone_numbers.len() - 1);
        }
    }

    /// Remove a phone number from the contact.
    ///
    /// If the removed number was primary, the first remaining number (in
    /// collection order) becomes primary, or none if the collection is
    /// now empty. Returns whether a number was removed.
    pub fn remove_phone_number(&mut self, value: &PhoneNumber) -> bool {
        let pos = match self.phone_numbers.iter().position(|p| p == value) {
            Some(pos) => pos,
            None => return false,
        };

        self.phone_numbers.remove(pos);
        tracing::debug!(number = %value, "removed phone number");

        self.primary = match self.primary {
            Some(idx) if idx == pos => {
                if self.phone_numbers.is_empty() {
                    None
                } else {
                    Some(0)
                }
            }
            // Elements past the removal point shifted left by one.
            Some(idx) if idx > pos => Some(idx - 1),
            other => other,
        };

        true
    }

    /// Mark an already-added number as the primary one.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotAMember` when the number is not currently
    /// in the contact's collection; the primary is left unchanged.
    pub fn set_primary_phone_number(&mut self, value: &PhoneNumber) -> ContactResult<()> {
        match self.phone_numbers.iter().position(|p| p == value) {
            Some(pos) => {
                tracing::debug!(number = %value, "set primary phone number");
                self.primary = Some(pos);
                Ok(())
            }
            None => Err(ContactError::NotAMember(value.to_string())),
        }
    }
}

/// On-the-wire shape of a Contact.
#[derive(Serialize, Deserialize)]
struct ContactRecord {
    first_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    middle_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    last_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phone_numbers: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary: Option<usize>,
}

// Serde support - serialize through the record shape
impl Serialize for Contact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ContactRecord {
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            phone_numbers: self.phone_numbers.clone(),
            primary: self.primary,
        }
        .serialize(serializer)
    }
}

// Serde support - deserialize with the entity invariants re-checked
impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let record = ContactRecord::deserialize(deserializer)?;

        if record.first_name.trim().is_empty() {
            return Err(D::Error::custom(ContactError::BlankFirstName));
        }

        for (idx, number) in record.phone_numbers.iter().enumerate() {
            if record.phone_numbers[..idx].contains(number) {
                return Err(D::Error::custom(format!(
                    "duplicate phone number: {}",
                    number
                )));
            }
        }

        if let Some(idx) = record.primary {
            if idx >= record.phone_numbers.len() {
                return Err(D::Error::custom(format!(
                    "primary index {} does not refer to a phone number",
                    idx
                )));
            }
        }

        Ok(Self {
            first_name: record.first_name,
            middle_name: record.middle_name,
            last_name: record.last_name,
            phone_numbers: record.phone_numbers,
            primary: record.primary,
        })
    }
}
