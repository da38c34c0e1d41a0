use acmehr::errors::AppError;
use acmehr::models::{Department, Employee, EmployeeType, Role};
use acmehr::store::Roster;
use acmehr::store::log::{hrlog, log_file_for};
use acmehr::store::roster::tmp_file_for;
use acmehr::store::record::{builder_for, parse_line};
use acmehr::utils::date::{decode_date, encode_date};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_data(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_acmehr_record.data.csv", name));
    fs::remove_file(&path).ok();
    path
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn assert_same_record(a: &Employee, b: &Employee) {
    assert_eq!(a.name(), b.name());
    assert_eq!(a.email(), b.email());
    assert_eq!(a.image(), b.image());
    assert_eq!(a.compensation(), b.compensation());
    assert_eq!(a.to_fields(), b.to_fields());
}

#[test]
fn test_round_trip_every_variant() {
    let mut originals = vec![
        Employee::salaried("Bob", "bob@acme-machining.com", 60000.0).unwrap(),
        Employee::hourly("Randy", "randy@acme-machining.com", 16.5).unwrap(),
        Employee::executive("Jim", "jim@acme-machining.com", 50001.0, Role::Cio).unwrap(),
        Employee::manager(
            "Julian",
            "julian@acme-machining.com",
            75000.25,
            Department::RAndD,
        )
        .unwrap(),
        Employee::permanent("Lahey", "lahey@acme-machining.com", 99.0, date(2023, 11, 2)).unwrap(),
        Employee::temporary("Ricky", "ricky@acme-machining.com", 42.0, date(2026, 2, 28)).unwrap(),
    ];
    originals[3].set_image("./images/julian.png").unwrap();

    for (i, original) in originals.iter().enumerate() {
        let restored = parse_line(i + 1, &original.long_form()).expect("record parses");
        assert_same_record(original, &restored);
        assert_ne!(original.id(), restored.id());
    }
}

#[test]
fn test_registry_knows_every_type() {
    for kind in EmployeeType::ALL {
        let (found, _) = builder_for(kind.name()).expect("registered");
        assert_eq!(found, kind);
    }
    assert!(builder_for("Contractor").is_none());
    assert!(builder_for("manager").is_none());
}

#[test]
fn test_date_sentinel() {
    assert_eq!(encode_date(date(2024, 3, 9)), "2024!3!9");
    assert_eq!(decode_date("2024!3!9"), Some(date(2024, 3, 9)));
    assert_eq!(decode_date("2024-03-09"), Some(date(2024, 3, 9)));
    assert_eq!(decode_date("2024!13!9"), None);
    assert_eq!(decode_date("yesterday"), None);
}

#[test]
fn test_unknown_type_is_a_load_error() {
    let err = parse_line(4, "Contractor,Bob,bob@acme-machining.com,img.png,60000.0").unwrap_err();
    assert!(matches!(
        err,
        AppError::UnknownEmployeeType { line: 4, ref name } if name == "Contractor"
    ));
}

#[test]
fn test_invalid_values_are_load_errors() {
    let cases = [
        "Salaried,Bob,bob@acme-machining.com,img.png,49999.0",
        "Salaried,Bob,bob@acme-machining.com,img.png,lots",
        "Salaried,Bob,bob@acme-machining.com,img.png",
        "Salaried,Bob,bob@acme-machining.com,img.png,60000.0,CEO",
        "Executive,Jim,jim@acme-machining.com,img.png,60000.0,CTO",
        "Manager,Jim,jim@acme-machining.com,img.png,60000.0,SALES",
        "Permanent,Jim,jim@acme-machining.com,img.png,20.0,someday",
        "Hourly,,randy@acme-machining.com,img.png,20.0",
        "Hourly,Randy,randy@acme-machining.com,,20.0",
    ];

    for line in cases {
        let err = parse_line(2, line).unwrap_err();
        assert!(
            matches!(err, AppError::CorruptRecord { line: 2, .. }),
            "expected corrupt record for {line:?}, got {err:?}"
        );
    }
}

#[test]
fn test_roster_save_and_load() {
    let path = temp_data("save_and_load");

    let mut roster = Roster::new(&path);
    roster.push(
        Employee::manager(
            "Julian",
            "julian@acme-machining.com",
            50001.0,
            Department::Machining,
        )
        .unwrap(),
    );
    roster.push(
        Employee::temporary("Randy", "randy@acme-machining.com", 16.0, date(2025, 4, 1)).unwrap(),
    );
    roster.save().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Manager,Julian,julian@acme-machining.com,./images/placeholder.png,50001.0,MACHINING",
            "Temporary,Randy,randy@acme-machining.com,./images/placeholder.png,16.0,2025!4!1",
        ]
    );

    let loaded = Roster::load(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    for (a, b) in roster.employees().iter().zip(loaded.employees()) {
        assert_same_record(a, b);
    }
}

#[test]
fn test_missing_file_is_an_empty_roster() {
    let path = temp_data("missing_file");
    let roster = Roster::load(&path).unwrap();
    assert!(roster.is_empty());
}

#[test]
fn test_blank_lines_are_ignored() {
    let path = temp_data("blank_lines");
    fs::write(
        &path,
        "Salaried,Bob,bob@acme-machining.com,img.png,60000.0\n\nHourly,Randy,randy@acme-machining.com,img.png,20.0\n",
    )
    .unwrap();

    let roster = Roster::load(&path).unwrap();
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_corrupt_line_aborts_load() {
    let path = temp_data("corrupt_line");
    fs::write(
        &path,
        "Salaried,Bob,bob@acme-machining.com,img.png,60000.0\nSalaried,Eve,eve@acme-machining.com,img.png,100.0\n",
    )
    .unwrap();

    let err = Roster::load(&path).err().expect("load must fail");
    assert!(matches!(err, AppError::CorruptRecord { line: 2, .. }));
}

#[test]
fn test_name_with_comma_survives_save() {
    let path = temp_data("comma_name");

    let mut roster = Roster::new(&path);
    roster.push(Employee::salaried("Lahey, Jim", "lahey@acme-machining.com", 60000.0).unwrap());
    roster.save().unwrap();

    let loaded = Roster::load(&path).unwrap();
    assert_eq!(loaded.employees()[0].name(), "Lahey, Jim");
}

#[test]
fn test_rows_and_totals() {
    let path = temp_data("rows");

    let mut roster = Roster::new(&path);
    roster.push(Employee::salaried("Bob", "bob@acme-machining.com", 52000.0).unwrap());
    roster.push(Employee::hourly("Randy", "randy@acme-machining.com", 20.0).unwrap());

    let rows = roster.rows("$");
    assert_eq!(rows[0].kind, "Salaried");
    assert_eq!(rows[0].pay, "$52,000.00");
    assert_eq!(rows[1].kind, "Hourly");
    assert_eq!(rows[1].pay, "$20.00");
    assert_eq!(rows[1].email, "randy@acme-machining.com");

    assert!((roster.weekly_total() - 1800.0).abs() < 1e-9);

    let id = roster.employees()[1].id();
    assert_eq!(roster.get(id).unwrap().name(), "Randy");
    assert!(matches!(roster.get(0), Err(AppError::EmployeeNotFound(0))));
}

#[test]
fn test_companion_files_extend_the_full_name() {
    let data = PathBuf::from("/tmp/hr/employee.data.csv");
    assert_eq!(log_file_for(&data), PathBuf::from("/tmp/hr/employee.data.csv.log"));
    assert_eq!(tmp_file_for(&data), PathBuf::from("/tmp/hr/employee.data.csv.tmp"));

    let odd = PathBuf::from("/tmp/hr/roster.log");
    assert_ne!(log_file_for(&odd), odd);
    assert_ne!(tmp_file_for(&odd), odd);
}

#[test]
fn test_save_leaves_unrelated_siblings_alone() {
    let path = temp_data("siblings");
    let sibling = path.with_extension("tmp");
    fs::write(&sibling, "keep me\n").unwrap();

    let mut roster = Roster::new(&path);
    roster.push(Employee::salaried("Bob", "bob@acme-machining.com", 60000.0).unwrap());
    roster.save().unwrap();

    assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me\n");
    assert!(!tmp_file_for(&path).exists());
    assert_eq!(Roster::load(&path).unwrap().len(), 1);
}

#[test]
fn test_log_of_a_dot_log_data_file_stays_separate() {
    let mut path = std::env::temp_dir();
    path.push("dotlog_acmehr_record.log");
    fs::remove_file(&path).ok();
    fs::remove_file(log_file_for(&path)).ok();

    let mut roster = Roster::new(&path);
    roster.push(Employee::hourly("Randy", "randy@acme-machining.com", 20.0).unwrap());
    roster.save().unwrap();
    hrlog(&path, "add", "1:Randy", "added").unwrap();

    let loaded = Roster::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(fs::read_to_string(log_file_for(&path)).unwrap().contains(",add,"));
}
