use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use markbook::markbook_models::{
    AcademicInfo, Address, Course, Exam, Marks, RevaluationRequest, Student,
};

/// A student that passes every check.
#[allow(dead_code)]
pub fn valid_student() -> Student {
    let roll_no = format!(
        "{:02}CS{:03}",
        (18..25u8).fake::<u8>(),
        (1..999u16).fake::<u16>()
    );
    Student {
        id: Some(format!("stu-{}", (1..100_000u32).fake::<u32>()).into()),
        roll_no: Some(roll_no),
        name: Some(Name().fake()),
        email: Some(SafeEmail().fake()),
        phone: Some("9876543210".to_string()),
        department: Some("Computer Science".to_string()),
        address: Some(Address {
            street: Some("12 College Road".to_string()),
            city: Some(CityName().fake()),
            state: Some("Karnataka".to_string()),
            pincode: Some("560001".to_string()),
        }),
        academic_info: Some(AcademicInfo {
            current_semester: Some((1..9u8).fake::<u8>() as f64),
            attendance: Some((75..101u8).fake::<u8>() as f64),
            cgpa: Some(8.2),
            admission_year: Some(2021.0),
        }),
    }
}

#[allow(dead_code)]
pub fn valid_course() -> Course {
    Course {
        code: Some("CS201".to_string()),
        name: Some("Data Structures".to_string()),
        credits: Some(4.0),
        semester: Some(3.0),
        department: Some("Computer Science".to_string()),
        max_students: Some(120.0),
        ..Course::default()
    }
}

#[allow(dead_code)]
pub fn valid_exam() -> Exam {
    Exam {
        course_id: Some("c1".into()),
        name: Some("Midterm".to_string()),
        exam_type: Some("mid".to_string()),
        max_marks: Some(100.0),
        weightage: Some(20.0),
        duration: Some(120.0),
        start_date: Some("2024-03-01".to_string()),
        end_date: Some("2024-03-02".to_string()),
        ..Exam::default()
    }
}

/// Marks between `min` and `max_marks` inclusive, with full attendance.
#[allow(dead_code)]
pub fn marks_between(min: u32, max_marks: u32) -> Marks {
    let obtained = (min..=max_marks).fake::<u32>() as f64;
    Marks {
        attendance: Some(100.0),
        ..Marks::new("s1", "c1", "e1", obtained, max_marks as f64)
    }
}

#[allow(dead_code)]
pub fn valid_revaluation_request() -> RevaluationRequest {
    RevaluationRequest {
        student_id: Some("s1".into()),
        course_id: Some("c1".into()),
        exam_id: Some("e1".into()),
        reason: Some("Question 4 was not evaluated".to_string()),
        request_date: Some("2024-06-01".to_string()),
        deadline: Some("2024-06-10".to_string()),
        fee: Some(250.0),
        status: Some("open".to_string()),
        ..RevaluationRequest::default()
    }
}
