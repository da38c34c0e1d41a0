use acmehr::errors::ValidationError;
use acmehr::models::validate::IMAGE_PLACEHOLDER;
use acmehr::models::employee::allocate_id;
use acmehr::models::{Department, Employee, EmployeeType, Field, FieldValue, Role};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

fn salaried() -> Employee {
    Employee::salaried("Bob", "bob@acme-machining.com", 60000.0).expect("valid salaried")
}

fn hourly() -> Employee {
    Employee::hourly("Randy", "randy@acme-machining.com", 20.0).expect("valid hourly")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn one_of_each() -> Vec<Employee> {
    vec![
        salaried(),
        hourly(),
        Employee::executive("Jim", "jim@acme-machining.com", 50001.0, Role::Cfo).unwrap(),
        Employee::manager(
            "Julian",
            "julian@acme-machining.com",
            50001.0,
            Department::Machining,
        )
        .unwrap(),
        Employee::permanent("Jim Lahey", "lahey@acme-machining.com", 99.0, date(2024, 3, 9))
            .unwrap(),
        Employee::temporary("Ricky", "ricky@acme-machining.com", 16.0, date(2025, 1, 31))
            .unwrap(),
    ]
}

// ---------------------------
// Construction & ids
// ---------------------------

#[test]
fn test_normal_construction() {
    let e = salaried();
    assert_eq!(e.name(), "Bob");
    assert_eq!(e.email(), "bob@acme-machining.com");
    assert_eq!(e.yearly(), Some(60000.0));
    assert_eq!(e.employee_type(), EmployeeType::Salaried);
}

#[test]
fn test_ids_increase() {
    let first = salaried();
    let second = hourly();
    assert!(first.id() >= 1);
    assert!(second.id() > first.id());
}

#[test]
fn test_id_counter_never_wraps() {
    let counter = AtomicU32::new(u32::MAX - 1);
    assert_eq!(allocate_id(&counter), Ok(u32::MAX - 1));
    assert_eq!(allocate_id(&counter), Err(ValidationError::IdsExhausted));
    assert_eq!(allocate_id(&counter), Err(ValidationError::IdsExhausted));
    assert_eq!(counter.load(Ordering::Relaxed), u32::MAX);
}

#[test]
fn test_id_is_read_only_for_every_variant() {
    for mut e in one_of_each() {
        let id = e.id();
        let err = e.set_field(Field::Id, FieldValue::Int(324)).unwrap_err();
        assert_eq!(err, ValidationError::ReadOnly("id"));
        assert_eq!(e.id(), id);
    }
}

#[test]
fn test_bad_salary_construction() {
    let res = Employee::salaried("Bob", "bob@acme-machining.com", 49999.0);
    assert_eq!(res.unwrap_err(), ValidationError::InvalidYearly);
}

#[test]
fn test_bad_email_construction() {
    let res = Employee::salaried("Bob", "bob@acme-machining.gov", 60000.0);
    assert!(matches!(res, Err(ValidationError::InvalidEmail(_))));
}

#[test]
fn test_bad_name_construction() {
    let res = Employee::salaried("", "bob@acme-machining.com", 60000.0);
    assert_eq!(res.unwrap_err(), ValidationError::InvalidName);
}

// ---------------------------
// Email
// ---------------------------

#[test]
fn test_email_empty() {
    let mut e = salaried();
    assert!(e.set_email("").is_err());
    assert_eq!(e.email(), "bob@acme-machining.com");
}

#[test]
fn test_long_email() {
    let mut e = salaried();
    let long = "bob@acme-machining.com".repeat(999);
    e.set_email(&long).unwrap();
    assert_eq!(e.email(), long);
}

#[test]
fn test_email_wrong_type() {
    let mut e = salaried();
    assert!(e.set_field(Field::Email, FieldValue::Int(999)).is_err());
    assert_eq!(e.email(), "bob@acme-machining.com");
}

#[test]
fn test_partial_email_domain() {
    let mut e = salaried();
    assert!(e.set_email("bob@ame-machining.com").is_err());
}

#[test]
fn test_normal_email() {
    let mut e = salaried();
    e.set_field(Field::Email, "robert@acme-machining.com".into())
        .unwrap();
    assert_eq!(e.email(), "robert@acme-machining.com");
}

// ---------------------------
// Name
// ---------------------------

#[test]
fn test_empty_name() {
    let mut e = salaried();
    assert_eq!(e.set_name(""), Err(ValidationError::InvalidName));
    assert_eq!(e.name(), "Bob");
}

#[test]
fn test_long_name() {
    let mut e = salaried();
    let long = "Bob".repeat(20000);
    e.set_name(&long).unwrap();
    assert_eq!(e.name(), long);
}

#[test]
fn test_special_characters_name() {
    let mut e = salaried();
    let odd = "#$@#$@!%$%%$^%&^*&^(^(*&|||||\\\\\\\\\\";
    e.set_name(odd).unwrap();
    assert_eq!(e.name(), odd);
}

#[test]
fn test_short_name() {
    let mut e = salaried();
    e.set_name("B").unwrap();
    assert_eq!(e.name(), "B");
}

#[test]
fn test_int_name() {
    let mut e = salaried();
    assert_eq!(
        e.set_field(Field::Name, FieldValue::Int(74534)),
        Err(ValidationError::InvalidName)
    );
}

// ---------------------------
// Image
// ---------------------------

#[test]
fn test_default_image_path() {
    assert_eq!(salaried().image(), IMAGE_PLACEHOLDER);
    assert_eq!(IMAGE_PLACEHOLDER, "./images/placeholder.png");
}

#[test]
fn test_new_image_path() {
    let mut e = salaried();
    e.set_image("./testimage/path.png").unwrap();
    assert_eq!(e.image(), "./testimage/path.png");
}

#[test]
fn test_int_and_empty_image_path() {
    let mut e = salaried();
    assert_eq!(
        e.set_field(Field::Image, FieldValue::Int(34234234)),
        Err(ValidationError::InvalidImage)
    );
    assert_eq!(e.set_image(""), Err(ValidationError::InvalidImage));
    assert_eq!(e.image(), IMAGE_PLACEHOLDER);
}

#[test]
fn test_checked_image_must_exist() {
    let mut e = salaried();
    let missing = "./definitely/not/here.png";
    assert_eq!(
        e.set_image_checked(missing),
        Err(ValidationError::ImageNotFound(missing.to_string()))
    );

    let existing: PathBuf = [env!("CARGO_MANIFEST_DIR"), "Cargo.toml"].iter().collect();
    let existing = existing.to_string_lossy().to_string();
    e.set_image_checked(&existing).unwrap();
    assert_eq!(e.image(), existing);
}

// ---------------------------
// Yearly
// ---------------------------

#[test]
fn test_missing_salary() {
    let mut e = salaried();
    assert_eq!(
        e.set_field(Field::Yearly, FieldValue::Missing),
        Err(ValidationError::InvalidYearly)
    );
}

#[test]
fn test_large_salary() {
    let mut e = salaried();
    e.set_yearly(999999999999.0).unwrap();
    assert_eq!(e.yearly(), Some(999999999999.0));
}

#[test]
fn test_salary_edges() {
    let mut e = salaried();
    assert_eq!(e.set_yearly(49999.0), Err(ValidationError::InvalidYearly));
    assert_eq!(e.set_yearly(50000.0), Err(ValidationError::InvalidYearly));
    assert_eq!(e.yearly(), Some(60000.0));

    e.set_yearly(50001.0).unwrap();
    assert_eq!(e.yearly(), Some(50001.0));
}

#[test]
fn test_salary_must_be_finite() {
    let mut e = salaried();
    for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(e.set_yearly(bad), Err(ValidationError::InvalidYearly));
    }
    assert_eq!(e.yearly(), Some(60000.0));
}

#[test]
fn test_salary_wrong_types() {
    let mut e = salaried();
    assert_eq!(
        e.set_field(Field::Yearly, "hello".into()),
        Err(ValidationError::InvalidYearly)
    );
    assert_eq!(
        e.set_field(Field::Yearly, FieldValue::Int(4234234)),
        Err(ValidationError::InvalidYearly)
    );
    assert_eq!(e.yearly(), Some(60000.0));
}

// ---------------------------
// Hourly
// ---------------------------

#[test]
fn test_hourly_range() {
    let mut e = hourly();
    e.set_hourly(16.0).unwrap();
    assert_eq!(e.hourly_rate(), Some(16.0));

    for bad in [15.0, 99.99, 14.0, 100.0, -20.0, f64::NAN, f64::INFINITY] {
        assert_eq!(e.set_hourly(bad), Err(ValidationError::InvalidHourly));
    }
    assert_eq!(e.hourly_rate(), Some(16.0));

    e.set_field(Field::Hourly, FieldValue::Float(99.98)).unwrap();
    assert_eq!(e.hourly_rate(), Some(99.98));
}

#[test]
fn test_hourly_wrong_type() {
    let mut e = hourly();
    assert_eq!(
        e.set_field(Field::Hourly, FieldValue::Int(20)),
        Err(ValidationError::InvalidHourly)
    );
}

#[test]
fn test_pay_field_of_other_basis_is_not_applicable() {
    let mut e = hourly();
    assert!(matches!(
        e.set_yearly(60000.0),
        Err(ValidationError::NotApplicable { field: "yearly", .. })
    ));

    let mut s = salaried();
    assert!(matches!(
        s.set_field(Field::Hourly, FieldValue::Float(20.0)),
        Err(ValidationError::NotApplicable { field: "hourly", .. })
    ));
}

// ---------------------------
// Role & department
// ---------------------------

#[test]
fn test_role_assignment() {
    let mut e = Employee::executive("Jim", "jim@acme-machining.com", 50001.0, Role::Cfo).unwrap();

    e.set_field(Field::Role, "ceo".into()).unwrap();
    assert_eq!(e.role(), Some(Role::Ceo));

    let err = e.set_field(Field::Role, "CTO".into()).unwrap_err();
    assert!(matches!(err, ValidationError::Role(_)));
    assert!(err.to_string().contains("Invalid role"));

    assert!(matches!(
        e.set_field(Field::Role, FieldValue::Int(4)),
        Err(ValidationError::Role(_))
    ));
    assert_eq!(e.role(), Some(Role::Ceo));
}

#[test]
fn test_department_assignment() {
    let mut e = Employee::manager(
        "Julian",
        "julian@acme-machining.com",
        50001.0,
        Department::Hr,
    )
    .unwrap();

    e.set_field(Field::Department, "R And D".into()).unwrap();
    assert_eq!(e.department(), Some(Department::RAndD));

    let err = e.set_field(Field::Department, "SALES".into()).unwrap_err();
    assert!(matches!(err, ValidationError::Department(_)));
    assert!(err.to_string().contains("Invalid department"));
    assert_eq!(e.department(), Some(Department::RAndD));
}

#[test]
fn test_role_only_applies_to_executives() {
    let mut e = Employee::manager(
        "Julian",
        "julian@acme-machining.com",
        50001.0,
        Department::Finance,
    )
    .unwrap();
    assert!(matches!(
        e.set_role(Role::Ceo),
        Err(ValidationError::NotApplicable { field: "role", .. })
    ));
}

#[test]
fn test_department_labels() {
    assert_eq!(Department::RAndD.label(), "R And D");
    assert_eq!(Department::from_code("r-and-d"), Some(Department::RAndD));
    assert_eq!(Department::from_code("Machining"), Some(Department::Machining));
    assert_eq!(Department::from_code("SALES"), None);
}

// ---------------------------
// Dates
// ---------------------------

#[test]
fn test_hired_date_requires_a_date() {
    let mut e =
        Employee::permanent("Jim Lahey", "lahey@acme-machining.com", 99.0, date(2024, 3, 9))
            .unwrap();

    assert_eq!(
        e.set_field(Field::HiredDate, "2024-01-01".into()),
        Err(ValidationError::InvalidHiredDate)
    );
    assert_eq!(e.hired_date(), Some(date(2024, 3, 9)));

    e.set_field(Field::HiredDate, date(2023, 12, 1).into())
        .unwrap();
    assert_eq!(e.hired_date(), Some(date(2023, 12, 1)));
}

#[test]
fn test_last_day_requires_a_date() {
    let mut e =
        Employee::temporary("Ricky", "ricky@acme-machining.com", 16.0, date(2025, 1, 31)).unwrap();

    assert_eq!(
        e.set_field(Field::LastDay, FieldValue::Int(20250131)),
        Err(ValidationError::InvalidLastDay)
    );
    e.set_last_day(date(2025, 6, 30)).unwrap();
    assert_eq!(e.last_day(), Some(date(2025, 6, 30)));
}

// ---------------------------
// Pay & formatting
// ---------------------------

#[test]
fn test_weekly_pay() {
    let s = Employee::salaried("Bob", "bob@acme-machining.com", 52000.0).unwrap();
    assert!((s.calc_pay() - 1000.0).abs() < 1e-9);

    let h = hourly();
    assert!((h.calc_pay() - 800.0).abs() < 1e-9);
}

#[test]
fn test_manager_scenario() {
    let m = Employee::manager(
        "Julian",
        "julian@acme-machining.com",
        50001.0,
        Department::Machining,
    )
    .unwrap();

    assert!((m.calc_pay() - 961.56).abs() < 0.01);
    assert!(m.long_form().starts_with(
        "Manager,Julian,julian@acme-machining.com,./images/placeholder.png,50001.0,MACHINING"
    ));
}

#[test]
fn test_short_form() {
    let e = salaried();
    assert_eq!(e.to_string(), format!("{}:Bob", e.id()));
}

#[test]
fn test_long_form_names_type_and_pay() {
    let forms: Vec<String> = one_of_each().iter().map(Employee::long_form).collect();

    assert_eq!(
        forms[0],
        "Salaried,Bob,bob@acme-machining.com,./images/placeholder.png,60000.0"
    );
    assert_eq!(
        forms[1],
        "Hourly,Randy,randy@acme-machining.com,./images/placeholder.png,20.0"
    );
    assert!(forms[2].starts_with("Executive,") && forms[2].ends_with(",50001.0,CFO"));
    assert!(forms[4].ends_with(",99.0,2024!3!9"));
    assert!(forms[5].ends_with(",16.0,2025!1!31"));
}
