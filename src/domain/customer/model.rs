//! Customer domain entity

/// Registered customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// CPF; primary key, immutable once registered
    pub tax_id: String,
    pub name: String,
    pub email: String,
    /// Id of an address that existed when the customer was last written
    pub address_id: i64,
}

/// Fields a customer update may change. The CPF is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: String,
    pub email: String,
    pub address_id: i64,
}

impl Customer {
    /// Builds the updated customer from this record and `changes`.
    pub fn apply(self, changes: CustomerChanges) -> Customer {
        Customer {
            tax_id: self.tax_id,
            name: changes.name,
            email: changes.email,
            address_id: changes.address_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_mutable_fields_only() {
        let customer = Customer {
            tax_id: "12345678900".into(),
            name: "Pablo Marçal".into(),
            email: "pablomarcal@dinheiro.com".into(),
            address_id: 1,
        };

        let updated = customer.apply(CustomerChanges {
            name: "Novo Nome".into(),
            email: "novo@mail.com".into(),
            address_id: 2,
        });

        assert_eq!(updated.tax_id, "12345678900");
        assert_eq!(updated.name, "Novo Nome");
        assert_eq!(updated.email, "novo@mail.com");
        assert_eq!(updated.address_id, 2);
    }
}
