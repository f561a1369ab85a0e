//! Address domain entity

/// Stored postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Assigned by the store on creation, never changed afterwards
    pub id: i64,
    /// CEP
    pub postal_code: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub street: String,
    /// Building or unit number
    pub number: Option<String>,
}

/// Every client-settable field of an address.
///
/// Used both to create an address and to replace one; it has no id, so a
/// payload can never pick or overwrite the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressData {
    pub postal_code: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub number: Option<String>,
}

impl AddressData {
    pub fn with_id(self, id: i64) -> Address {
        Address {
            id,
            postal_code: self.postal_code,
            state: self.state,
            city: self.city,
            district: self.district,
            street: self.street,
            number: self.number,
        }
    }
}

impl Address {
    /// New value carrying this address's id and every field from `data`.
    pub fn replace(self, data: AddressData) -> Address {
        data.with_id(self.id)
    }
}
