pub mod a001_carpet;
pub mod a002_worker;
pub mod a003_processing_carpet;
pub mod a004_staff;
pub mod a005_salary;
pub mod a006_expenditure;
pub mod a007_income;
pub mod a008_finance;
pub mod a009_customer;
pub mod a010_agreement;
pub mod a011_rent;
pub mod a012_service;
pub mod a013_unit;
pub mod a014_unit_bill;
pub mod d400_summary;
