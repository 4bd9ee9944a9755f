// src/utils/html.rs

//! Server-rendered pages.
//!
//! Every piece of participant or bank text goes through [`escape`] before it
//! reaches the markup, both in element bodies and attribute values.

use crate::models::{
    question::{QuestionBank, QuestionKind, QuestionRecord},
    submission::LoginForm,
};

/// Escapes arbitrary text for use in HTML text or quoted attribute values.
pub fn escape(input: &str) -> String {
    ammonia::clean_text(input)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn login_page() -> String {
    page(
        "Quiz Login",
        r#"<h1>Quiz Login</h1>
<form method="post" action="/start_quiz">
<label>Name <input type="text" name="name" required></label><br>
<label>Email <input type="email" name="email" required></label><br>
<label>Roll No <input type="text" name="roll" required></label><br>
<button type="submit">Start Quiz</button>
</form>"#,
    )
}

fn hidden(name: &str, value: Option<&str>) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
        name,
        escape(value.unwrap_or_default())
    )
}

/// Single questions post the choice text, multiple questions post labels.
fn question_block(number: usize, question: &QuestionRecord) -> String {
    let mut out = format!(
        "<fieldset>\n<legend>{}. {}</legend>\n",
        number,
        escape(&question.prompt)
    );
    let field = question.id.to_string();

    for (label, text) in question.labelled_choices() {
        let (input_type, value) = match question.kind {
            QuestionKind::Single => ("radio", escape(text)),
            QuestionKind::Multiple => ("checkbox", label.to_string()),
        };
        out.push_str(&format!(
            "<label><input type=\"{}\" name=\"{}\" value=\"{}\"> {}) {}</label><br>\n",
            input_type,
            field,
            value,
            label,
            escape(text)
        ));
    }

    out.push_str("</fieldset>\n");
    out
}

/// Quiz form listing questions in the bank's presentation order.
pub fn quiz_page(login: &LoginForm, bank: &QuestionBank) -> String {
    let mut body = String::from("<h1>Quiz</h1>\n");

    if let Some(name) = login.name.as_deref() {
        body.push_str(&format!("<p>Participant: {}</p>\n", escape(name)));
    }

    if bank.is_empty() {
        body.push_str("<p>No questions are available right now.</p>\n");
        return page("Quiz", &body);
    }

    body.push_str("<form method=\"post\" action=\"/submit\">\n");
    body.push_str(&hidden("name", login.name.as_deref()));
    body.push_str(&hidden("email", login.email.as_deref()));
    body.push_str(&hidden("roll", login.roll.as_deref()));

    for (i, question) in bank.iter().enumerate() {
        body.push_str(&question_block(i + 1, question));
    }

    body.push_str("<button type=\"submit\">Submit</button>\n</form>");
    page("Quiz", &body)
}

pub fn response_saved_page(name: Option<&str>) -> String {
    let greeting = match name {
        Some(name) if !name.is_empty() => format!("Thank you, {}!", escape(name)),
        _ => "Thank you!".to_string(),
    };
    page(
        "Response Saved",
        &format!("<h1>{}</h1>\n<p>Your response has been saved.</p>", greeting),
    )
}

pub fn qr_page() -> String {
    page(
        "Quiz QR Code",
        r#"<img src="/download_qr" alt="QR Code"><p>Scan to access the quiz!</p>
<a href="/download_qr" download="quiz_qr_code.png">Download QR Code</a>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::new(
            vec![
                QuestionRecord {
                    id: 1,
                    prompt: "Is <b> bold?".to_string(),
                    choices: vec!["Yes".into(), "No".into()],
                    correct_answers: vec!["A".into()],
                    kind: QuestionKind::Single,
                },
                QuestionRecord {
                    id: 2,
                    prompt: "Pick two".to_string(),
                    choices: vec!["x".into(), "y".into()],
                    correct_answers: vec!["A".into(), "B".into()],
                    kind: QuestionKind::Multiple,
                },
            ],
            vec![2, 1],
        )
    }

    #[test]
    fn test_escape_strips_markup() {
        let escaped = escape("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn test_quiz_page_renders_inputs() {
        let login = LoginForm {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            roll: Some("7".into()),
        };
        let html = quiz_page(&login, &bank());

        assert!(html.contains("type=\"radio\" name=\"1\" value=\"Yes\""));
        assert!(html.contains("type=\"checkbox\" name=\"2\" value=\"A\""));
        assert!(!html.contains("<b>"));
        // presentation order follows the bank
        let first = html.find("name=\"2\"").unwrap();
        let second = html.find("name=\"1\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_quiz_page_empty_bank() {
        let html = quiz_page(&LoginForm::default(), &QuestionBank::default());
        assert!(html.contains("No questions are available"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_response_saved_escapes_name() {
        let html = response_saved_page(Some("<i>Eve</i>"));
        assert!(!html.contains("<i>"));
    }
}
