use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expenses";

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &TempDir, date: &str, category: &str, amount: &str) {
    expenses(data_dir)
        .args(["add", category, amount, "--date", date])
        .assert()
        .success();
}

#[test]
fn add_then_list_shows_expense_and_total() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Groceries", "42.10", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("Added expense 1: Groceries $42.10 on 2024-01-15"));

    add(&dir, "2024-01-20", "Rent", "800");

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("Rent"))
        .stdout(contains("Total: $842.10"));
}

#[test]
fn list_with_range_reports_period_total() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-15", "Groceries", "10");
    add(&dir, "2024-02-15", "Groceries", "20");

    expenses(&dir)
        .args(["list", "--from", "2024-02-01", "--to", "2024-02-29"])
        .assert()
        .success()
        .stdout(contains("Total from 2024-02-01 to 2024-02-29: $20.00"))
        .stdout(contains("2024-01-15").not());
}

#[test]
fn list_limit_keeps_period_total() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-01", "Coffee", "3");
    add(&dir, "2024-01-02", "Lunch", "12");
    add(&dir, "2024-01-03", "Books", "25");

    expenses(&dir)
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Books"))
        .stdout(contains("Coffee").not())
        .stdout(contains("Total: $40.00"));
}

#[test]
fn invalid_amount_fails_without_storing() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Food", "-5", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount! Enter a positive number."));

    expenses(&dir)
        .args(["add", "Food", "abc"])
        .assert()
        .failure();

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn out_of_range_month_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["list", "--month", "262142-12"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 262142-12"));
}

#[test]
fn invalid_date_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Food", "5", "--date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date! Use YYYY-MM-DD format."));
}

#[test]
fn delete_removes_only_named_ids() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-01", "Coffee", "3.50");
    add(&dir, "2024-01-02", "Books", "12");

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted 1 expense(s)."));

    expenses(&dir)
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout(contains("No matching expenses found."));

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Coffee").not())
        .stdout(contains("Books"));
}

#[test]
fn show_prints_single_expense() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-03-09", "Books", "9.99");

    expenses(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(contains("Category: Books"))
        .stdout(contains("Amount:   $9.99"));

    expenses(&dir)
        .args(["show", "5"])
        .assert()
        .failure()
        .stderr(contains("Expense not found: 5"));
}

#[test]
fn delete_all_requires_force_and_restarts_ids() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-01", "Coffee", "3.50");
    add(&dir, "2024-01-02", "Books", "12");

    expenses(&dir)
        .args(["delete-all"])
        .assert()
        .success()
        .stdout(contains("Use --force to confirm deletion"));

    expenses(&dir)
        .args(["delete-all", "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted all 2 expense(s)."));

    expenses(&dir)
        .args(["add", "Tea", "2", "--date", "2024-01-03"])
        .assert()
        .success()
        .stdout(contains("Added expense 1:"));
}

#[test]
fn report_summarizes_categories() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "600");
    add(&dir, "2024-01-06", "Dining Out", "150");
    add(&dir, "2024-02-06", "Dining Out", "50");

    expenses(&dir)
        .args(["report"])
        .assert()
        .success()
        .stdout(contains("Total Spending: $800.00"))
        .stdout(contains("Dining Out"))
        .stdout(contains("2024-02"));
}

#[test]
fn report_exports_csv() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "600");
    let out = dir.path().join("report.csv");

    expenses(&dir)
        .args(["report", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Period,Category,Amount,Expense Count,Percentage"));
    assert!(csv.contains("TOTAL"));
}

#[test]
fn recommend_flags_heavy_dining() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "700");
    add(&dir, "2024-01-06", "Dining Out", "300");

    expenses(&dir)
        .args(["recommend"])
        .assert()
        .success()
        .stdout(contains("Dining Out is 30.0% of spending"));
}

#[test]
fn recommend_encourages_when_nothing_fires() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "700");

    expenses(&dir)
        .args(["recommend"])
        .assert()
        .success()
        .stdout(contains("You're doing great! Keep up the good work."));
}

#[test]
fn export_formats_follow_flag() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Dining, Out", "12.5");

    let csv_path = dir.path().join("out.csv");
    expenses(&dir)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("ID,Date,Category,Amount"));
    assert!(csv.contains("\"Dining, Out\""));

    let json_path = dir.path().join("out.json");
    expenses(&dir)
        .arg("export")
        .arg(&json_path)
        .args(["--format", "json"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["metadata"]["expense_count"], 1);
}

#[test]
fn json_export_honours_month() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "600");
    add(&dir, "2024-02-05", "Food", "90");

    let json_path = dir.path().join("jan.json");
    expenses(&dir)
        .arg("export")
        .arg(&json_path)
        .args(["--format", "json", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["metadata"]["expense_count"], 1);
    assert_eq!(json["expenses"][0]["category"], "Rent");
}

#[test]
fn chart_escapes_category_labels() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Food & Drinks", "30");

    let pie = dir.path().join("pie.svg");
    expenses(&dir)
        .args(["chart", "pie", "-o"])
        .arg(&pie)
        .assert()
        .success();
    let svg = std::fs::read_to_string(&pie).unwrap();
    assert!(svg.contains("Food &amp; Drinks"));
}

#[test]
fn chart_writes_svg() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "Rent", "600");
    add(&dir, "2024-02-05", "Food", "90");

    let bar = dir.path().join("bar.svg");
    expenses(&dir)
        .args(["chart", "bar", "--output"])
        .arg(&bar)
        .assert()
        .success()
        .stdout(contains("Chart written to:"));
    assert!(std::fs::read_to_string(&bar).unwrap().contains("<svg"));

    let pie = dir.path().join("pie.svg");
    expenses(&dir)
        .args(["chart", "pie", "-o"])
        .arg(&pie)
        .assert()
        .success();
    assert!(std::fs::read_to_string(&pie).unwrap().contains("Rent"));
}

#[test]
fn chart_without_data_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["chart", "pie"])
        .assert()
        .failure();
}

#[test]
fn init_and_config_show_paths() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"))
        .stdout(contains("Dining Out above 20%"));
    assert!(dir.path().join("config.json").exists());

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: $"))
        .stdout(contains(dir.path().to_string_lossy().as_ref()));
}
