use crate::utils::checks::{check_range, check_whole_in_range, finish, present, require_text};
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::students::Student;
use markbook_models::value_types::{Email, PhoneNumber, PinCode, RollNumber};
use tracing::instrument;

/// Validate a student record.
///
/// Required: `rollNo`, `name`, `email`. Formats: roll number (`21CS042`),
/// email, ten-digit phone, six-digit pincode. Ranges: semester 1–8,
/// attendance 0–100, CGPA 0–10, admission year 1900–2100.
#[instrument(level = "debug", skip_all)]
pub fn validate_student(student: &Student) -> ValidationResult {
    let mut result = ValidationResult::new();

    let roll_no = require_text(
        &mut result,
        "rollNo",
        "Roll number",
        student.roll_no.as_deref(),
    );
    require_text(&mut result, "name", "Name", student.name.as_deref());
    let email = require_text(&mut result, "email", "Email", student.email.as_deref());

    if let Some(roll_no) = roll_no {
        if let Err(err) = RollNumber::new(roll_no) {
            result.add_error(
                "rollNo",
                ValidationErrorType::InvalidFormat,
                err.to_string(),
            );
        }
    }
    if let Some(email) = email {
        if let Err(err) = Email::new(email) {
            result.add_error("email", ValidationErrorType::InvalidFormat, err.to_string());
        }
    }
    if let Some(phone) = student.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        if let Err(err) = PhoneNumber::new(phone) {
            result.add_error("phone", ValidationErrorType::InvalidFormat, err.to_string());
        }
    }
    if let Some(pincode) = student
        .address
        .as_ref()
        .and_then(|a| a.pincode.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        if let Err(err) = PinCode::new(pincode) {
            result.add_error(
                "address.pincode",
                ValidationErrorType::InvalidFormat,
                err.to_string(),
            );
        }
    }

    if let Some(info) = &student.academic_info {
        if let Some(semester) = present(info.current_semester) {
            check_whole_in_range(
                &mut result,
                "academicInfo.currentSemester",
                "Current semester",
                semester,
                1.0,
                8.0,
            );
        }
        if let Some(attendance) = present(info.attendance) {
            check_range(
                &mut result,
                "academicInfo.attendance",
                "Attendance",
                attendance,
                0.0,
                100.0,
            );
        }
        if let Some(cgpa) = present(info.cgpa) {
            check_range(&mut result, "academicInfo.cgpa", "CGPA", cgpa, 0.0, 10.0);
        }
        if let Some(year) = present(info.admission_year) {
            check_whole_in_range(
                &mut result,
                "academicInfo.admissionYear",
                "Admission year",
                year,
                1900.0,
                2100.0,
            );
        }
    }

    finish("student", result)
}
