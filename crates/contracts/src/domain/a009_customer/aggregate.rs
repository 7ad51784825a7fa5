use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::attachment::AttachmentType;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique customer (tenant) identifier
    CustomerId
);

/// Shopkeeper renting one or more shops in the building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    pub name: String,
    pub father_name: String,
    pub phone_number: String,
    /// Owner of the rented property
    pub rental_owner: String,
    pub nic: String,
    pub address: String,
    /// Stored file name under the media directory
    pub attachment: Option<String>,
}

impl Customer {
    pub fn new_for_insert(dto: &CustomerDto, attachment: Option<String>) -> Self {
        Self {
            base: BaseAggregate::new(CustomerId::new_v4()),
            name: dto.name.trim().to_string(),
            father_name: dto.father_name.trim().to_string(),
            phone_number: dto.phone_number.trim().to_string(),
            rental_owner: dto.rental_owner.trim().to_string(),
            nic: dto.nic.trim().to_string(),
            address: dto.address.clone(),
            attachment,
        }
    }

    /// `attachment == None` keeps the stored file
    pub fn update(&mut self, dto: &CustomerDto, attachment: Option<String>) {
        self.name = dto.name.trim().to_string();
        self.father_name = dto.father_name.trim().to_string();
        self.phone_number = dto.phone_number.trim().to_string();
        self.rental_owner = dto.rental_owner.trim().to_string();
        self.nic = dto.nic.trim().to_string();
        self.address = dto.address.clone();
        if attachment.is_some() {
            self.attachment = attachment;
        }
    }

    pub fn attachment_type(&self) -> Option<AttachmentType> {
        self.attachment
            .as_deref()
            .map(AttachmentType::from_file_name)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("نام نمی‌تواند خالی باشد".into());
        }
        if self.phone_number.is_empty() {
            return Err("شماره تماس نمی‌تواند خالی باشد".into());
        }
        if self.nic.is_empty() {
            return Err("نمبر تذکره نمی‌تواند خالی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_view(&self) -> CustomerView {
        CustomerView {
            id: self.base.id.as_string(),
            name: self.name.clone(),
            father_name: self.father_name.clone(),
            phone_number: self.phone_number.clone(),
            rental_owner: self.rental_owner.clone(),
            nic: self.nic.clone(),
            address: self.address.clone(),
            attachment: self.attachment.clone(),
            attachment_type: self.attachment_type(),
        }
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "دوکاندار"
    }

    fn list_name() -> &'static str {
        "دوکانداران"
    }
}

/// Text fields of the multipart create/update form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub name: String,
    pub father_name: String,
    pub phone_number: String,
    pub rental_owner: String,
    pub nic: String,
    pub address: String,
}

/// Customer as returned by the API, with the derived attachment kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub father_name: String,
    pub phone_number: String,
    pub rental_owner: String,
    pub nic: String,
    pub address: String,
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<AttachmentType>,
}

impl CustomerView {
    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            father_name: self.father_name.clone(),
            phone_number: self.phone_number.clone(),
            rental_owner: self.rental_owner.clone(),
            nic: self.nic.clone(),
            address: self.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CustomerDto {
        CustomerDto {
            name: "محمود".into(),
            phone_number: "0700000000".into(),
            nic: "1234".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_attachment_type_derived() {
        let customer = Customer::new_for_insert(&dto(), Some("lease.pdf".into()));
        assert_eq!(customer.attachment_type(), Some(AttachmentType::Pdf));

        let without = Customer::new_for_insert(&dto(), None);
        assert_eq!(without.attachment_type(), None);
        let json = serde_json::to_value(without.to_view()).unwrap();
        assert!(json.get("attachment_type").is_none());
    }

    #[test]
    fn test_update_keeps_attachment() {
        let mut customer = Customer::new_for_insert(&dto(), Some("a.png".into()));
        customer.update(&dto(), None);
        assert_eq!(customer.attachment.as_deref(), Some("a.png"));
        customer.update(&dto(), Some("b.pdf".into()));
        assert_eq!(customer.attachment.as_deref(), Some("b.pdf"));
    }
}
