#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

/// Reply from the example coaching session: a nurse who loves coding.
pub fn nurse_reply_fixture() -> &'static str {
    return r#"[CONVERSATION] Consider health-tech roles. [DATA] {"skills":["Nursing","Python"],"values":["Impact"],"paths":["Health Informatics"],"roadmap":"Take an SQL course"}"#;
}

/// Reply shaped the way models usually answer, over several lines.
pub fn teacher_reply_fixture() -> &'static str {
    return r#"
[CONVERSATION]
Teaching already gives you strong communication and planning skills. Data roles
need people who can explain numbers to others, so you are closer than you think.

[DATA]
{
  "skills": ["Public Speaking", "Curriculum Design", "Excel"],
  "values": ["Flexibility", "Growth"],
  "paths": ["Data Analyst", "Learning Experience Designer"],
  "roadmap": "Finish a beginner SQL course and rebuild one gradebook as a dashboard"
}
"#
    .trim();
}

/// Reply where the model cut off in the middle of the structured block.
pub fn truncated_reply_fixture() -> &'static str {
    return r#"[CONVERSATION] Great question! [DATA] {"skills": ["Nursing", "Pyth"#;
}
