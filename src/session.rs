//! Interactive menu loop over the in-memory roster.
//!
//! The session owns the roster for the lifetime of one run. Each iteration
//! presents the five-action menu, performs the chosen action (which may
//! prompt for further input), prints the result, and loops until Exit.

use anyhow::Result;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::catalog::{self, CATALOG};
use crate::error::RegistrarError;
use crate::student::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddStudent,
    EnrollCourse,
    ViewBalance,
    ShowStatus,
    Exit,
}

const MENU: &[(&str, MenuAction)] = &[
    ("Add a new student", MenuAction::AddStudent),
    ("Enroll in a course", MenuAction::EnrollCourse),
    ("View balance", MenuAction::ViewBalance),
    ("Show status", MenuAction::ShowStatus),
    ("Exit", MenuAction::Exit),
];

const BANNER_RULE: &str = "=====================================================";

/// Print a bold banner line framed by rules, in the house color.
pub fn print_banner(message: &str) {
    println!("{}", BANNER_RULE.truecolor(41, 173, 255).bold());
    println!(
        "{}",
        format!("      {}", message).truecolor(41, 173, 255).bold()
    );
    println!("{}", BANNER_RULE.truecolor(41, 173, 255).bold());
}

pub struct Session {
    roster: Vec<Student>,
}

impl Session {
    pub fn new() -> Self {
        Self { roster: Vec::new() }
    }

    /// Run the menu loop until the user selects Exit. Only prompt I/O
    /// failures propagate; domain errors are printed and recovered locally.
    pub fn run(&mut self) -> Result<()> {
        let labels: Vec<&str> = MENU.iter().map(|(label, _)| *label).collect();
        loop {
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(
                    "What would you like to do?"
                        .truecolor(255, 173, 41)
                        .bold()
                        .to_string(),
                )
                .items(&labels)
                .default(0)
                .interact()?;

            match MENU[choice].1 {
                MenuAction::AddStudent => self.add_student()?,
                MenuAction::EnrollCourse => self.enroll_course()?,
                MenuAction::ViewBalance => self.view_balance()?,
                MenuAction::ShowStatus => self.show_status()?,
                MenuAction::Exit => {
                    print_banner("Thank you for using Student Management System");
                    return Ok(());
                }
            }
        }
    }

    fn add_student(&mut self) -> Result<()> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter student name:")
            .allow_empty(true)
            .interact_text()?;
        self.roster.push(Student::new(name));
        println!("{}", "Student added successfully!".green().bold());
        Ok(())
    }

    fn enroll_course(&mut self) -> Result<()> {
        let Some(idx) = self.select_student("Choose a student to enroll:")? else {
            return Ok(());
        };

        let course_idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a course to enroll:")
            .items(&catalog::names())
            .default(0)
            .interact()?;
        let course = &CATALOG[course_idx];

        let payment: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Tuition for {} is {}. Enter payment amount:",
                course.name,
                format!("${}", course.price).green().bold()
            ))
            .interact_text()?;

        enroll_with_payment(&mut self.roster[idx], course.name, course.price, payment);
        Ok(())
    }

    fn view_balance(&mut self) -> Result<()> {
        let Some(idx) = self.select_student("Choose a student to view balance:")? else {
            return Ok(());
        };
        // The raw overpayment credit, not the owed total from "Show status".
        let adjustment = self.roster[idx].balance_adjustment();
        println!("{}", format!("Current balance: ${}", adjustment).yellow());
        Ok(())
    }

    fn show_status(&mut self) -> Result<()> {
        let Some(idx) = self.select_student("Choose a student to show status:")? else {
            return Ok(());
        };
        print_status(&self.roster[idx]);
        Ok(())
    }

    /// Prompt for a student by roster position. With an empty roster the
    /// `EmptyRoster` message is printed and `None` returned, sending the
    /// caller straight back to the menu.
    fn select_student(&self, prompt: &str) -> Result<Option<usize>> {
        if self.roster.is_empty() {
            println!("{}", RegistrarError::EmptyRoster.to_string().red());
            return Ok(None);
        }
        let idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&student_labels(&self.roster))
            .default(0)
            .interact()?;
        Ok(Some(idx))
    }
}

/// Enroll, then attempt the payment, both from the same payment/price pair.
/// The enrollment is recorded before the payment check runs, so a rejected
/// payment still leaves an enrolled, unpaid record.
fn enroll_with_payment(student: &mut Student, course: &str, price: f64, payment: f64) {
    student.enroll(course, payment >= price);
    println!("{}", format!("Enrolled in {}", course).green());

    match student.pay_tuition(payment, price) {
        Ok(remaining) => println!(
            "{}",
            format!(
                "Payment successful for ${} for course. Remaining balance: ${}",
                price, remaining
            )
            .green()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

/// 1-based "position. name" labels for the student selection prompts.
fn student_labels(roster: &[Student]) -> Vec<String> {
    roster
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.name))
        .collect()
}

fn print_status(student: &Student) {
    println!("{}", format!("Name: {}", student.name).blue());
    println!("{}", format!("Student ID: {}", student.id).blue());
    println!("{}", "Courses Enrolled:".blue());
    for enrollment in &student.enrollments {
        // The stored flag from enrollment time, not a live recomputation.
        let status = if enrollment.paid {
            "Paid".green()
        } else {
            "Not Paid".red()
        };
        println!("{}{}", format!("- {}: ", enrollment.course).blue(), status);
    }
    println!(
        "{}",
        format!("Balance: ${}", student.total_owed()).blue()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_is_five_actions_in_fixed_order() {
        let labels: Vec<&str> = MENU.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Add a new student",
                "Enroll in a course",
                "View balance",
                "Show status",
                "Exit"
            ]
        );
        assert_eq!(MENU[4].1, MenuAction::Exit);
    }

    #[test]
    fn test_student_labels_are_one_based_positions() {
        let roster = vec![Student::new("Ana"), Student::new("Ben")];
        assert_eq!(student_labels(&roster), vec!["1. Ana", "2. Ben"]);
    }

    #[test]
    fn test_new_session_has_empty_roster() {
        let session = Session::new();
        assert!(session.roster.is_empty());
    }

    #[test]
    fn test_sufficient_payment_marks_paid_and_credits_overage() {
        let mut student = Student::new("Ana");
        enroll_with_payment(&mut student, "Web 3.0", 2000.0, 2500.0);
        assert_eq!(student.enrollments.len(), 1);
        assert!(student.enrollments[0].paid);
        assert_eq!(student.balance_adjustment(), 500.0);
    }

    #[test]
    fn test_rejected_payment_still_records_unpaid_enrollment() {
        let mut student = Student::new("Ana");
        enroll_with_payment(&mut student, "Metaverse", 2000.0, 1000.0);
        // The enrollment lands before the payment is checked.
        assert_eq!(student.enrollments.len(), 1);
        assert_eq!(student.enrollments[0].course, "Metaverse");
        assert!(!student.enrollments[0].paid);
        assert_eq!(student.balance_adjustment(), 0.0);
        assert_eq!(student.total_owed(), 2000.0);
    }

    #[test]
    fn test_exact_payment_marks_paid_with_zero_credit() {
        let mut student = Student::new("Ana");
        enroll_with_payment(&mut student, "AI", 3000.0, 3000.0);
        assert!(student.enrollments[0].paid);
        assert_eq!(student.balance_adjustment(), 0.0);
        assert_eq!(student.total_owed(), 3000.0);
    }
}
