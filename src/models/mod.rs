pub mod department;
pub mod employee;
pub mod employee_type;
pub mod field;
pub mod role;
pub mod validate;

pub use department::Department;
pub use employee::{Compensation, Employee, HourlyTenure, SalariedGrade};
pub use employee_type::EmployeeType;
pub use field::{Field, FieldValue};
pub use role::Role;
