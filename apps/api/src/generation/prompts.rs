// Prompt construction for cover letter generation.
// The banned-phrase list overlaps the Tone metric's denylist so that a
// freshly generated letter is not immediately penalised by the scorer.

use chrono::NaiveDate;

use crate::generation::request::{provided, CoverLetterRequest};

/// System prompt for letter generation — HTML body only.
pub const COVER_LETTER_SYSTEM: &str = "You are a world-class professional cover letter writer. \
    Return only the HTML cover letter body — no markdown, no preamble.";

/// Phrases the model must never use in the letter body.
pub const BANNED_PHRASES: &[&str] = &[
    "I am excited to apply",
    "I am writing to express my interest",
    "I am passionate about",
    "dynamic",
    "synergy",
    "leverage",
    "impactful",
    "world-class",
    "I would be a great fit",
    "thrilled",
    "delighted",
    "I am confident that",
    "look no further",
    "results-driven",
    "team player",
    "fast-paced environment",
];

const SECTION_RULE: &str = "════════════════════════════════════════";

/// Letter date in British long form, e.g. "19 February 2026".
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Sender lines: candidate name followed by whichever contact details were given.
pub fn sender_lines(req: &CoverLetterRequest) -> Vec<&str> {
    let mut lines = vec![req.candidate_name.as_str()];
    lines.extend(
        [
            &req.candidate_address,
            &req.candidate_email,
            &req.candidate_phone,
        ]
        .into_iter()
        .filter_map(provided),
    );
    lines
}

/// Recipient lines: hiring manager (if named), company, and company address.
pub fn recipient_lines(req: &CoverLetterRequest) -> Vec<&str> {
    let mut lines: Vec<&str> = [&req.hiring_manager_name, &req.hiring_manager_title]
        .into_iter()
        .filter_map(provided)
        .collect();
    lines.push(req.company_name.as_str());
    if !req.company_address.is_empty() {
        lines.push(req.company_address.as_str());
    }
    lines
}

pub fn salutation(req: &CoverLetterRequest) -> String {
    match provided(&req.hiring_manager_name) {
        Some(name) => format!("Dear {name},"),
        None => "Dear Hiring Manager,".to_string(),
    }
}

/// "Yours sincerely" when the reader is named, "Yours faithfully" otherwise.
pub fn valediction(req: &CoverLetterRequest) -> &'static str {
    if provided(&req.hiring_manager_name).is_some() {
        "Yours sincerely,"
    } else {
        "Yours faithfully,"
    }
}

/// Candidate data block fed to the body paragraphs.
fn candidate_data(req: &CoverLetterRequest) -> String {
    let mut blocks = vec![format!("CANDIDATE: {}", req.candidate_name)];
    if let Some(years) = provided(&req.years_of_experience) {
        blocks.push(format!("EXPERIENCE: {years}"));
    }
    blocks.push(format!(
        "TARGET ROLE: {} at {}",
        req.job_title, req.company_name
    ));
    blocks.push(format!("JOB DESCRIPTION:\n{}", req.job_description));
    if let Some(values) = provided(&req.company_values) {
        blocks.push(format!(
            "COMPANY NOTES (values/culture/product):\n{values}"
        ));
    }
    blocks.push(format!(
        "KEY ACHIEVEMENTS — use these verbatim or very closely paraphrased. \
         These are the heart of the letter:\n{}",
        req.top_achievements
    ));
    blocks.push(format!("RELEVANT SKILLS: {}", req.relevant_skills));
    if let Some(why) = provided(&req.why_this_company) {
        blocks.push(format!(
            "WHY THIS COMPANY (candidate's own words — keep their voice and specifics):\n{why}"
        ));
    }
    if let Some(why) = provided(&req.why_this_role) {
        blocks.push(format!("WHY THIS ROLE (candidate's own words):\n{why}"));
    }
    if let Some(extra) = provided(&req.additional_context) {
        blocks.push(format!("ADDITIONAL CONTEXT:\n{extra}"));
    }
    blocks.join("\n\n")
}

fn indented(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| format!("   {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full user prompt for one letter, dated `today`.
pub fn build_cover_letter_prompt(req: &CoverLetterRequest, today: NaiveDate) -> String {
    let banned = BANNED_PHRASES
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a world-class professional cover letter writer. You write with clarity, confidence, and specificity. Your letters follow standard business letter format and read like a sharp, thoughtful person wrote them.

TASK: Write a complete, properly structured cover letter from the candidate data below.

{rule}
LETTER STRUCTURE — output EVERY section in this exact order:
{rule}

1. SENDER BLOCK
   One item per <p> tag, wrapped in a <div class="sender-block">:
{sender}

2. DATE
   A single <p class="letter-date"> tag containing: {date}

3. RECIPIENT BLOCK
   One item per <p> tag, wrapped in a <div class="recipient-block">:
{recipient}

4. SUBJECT LINE
   Format: <p class="letter-subject"><strong>Re: Application for {job_title}</strong></p>

5. SALUTATION
   Use exactly: <p class="letter-salutation">{salutation}</p>

6. BODY (3–4 paragraphs, each a <p class="letter-body"> tag)
   HARD RULES for the body:
   a) NEVER use these phrases: {banned}.
   b) Open with a direct, specific sentence that signals relevance: a concrete result, a shared problem, or an observation about the company. NOT "I saw your job posting".
   c) Ground every claim in the candidate's actual achievements. Keep their numbers.
   d) Reference company details from the notes. If no notes are given, stay general and do NOT invent specifics.
   e) First person, active voice. Past tense for achievements, present/future for intentions.
   f) Prose only. No bullet points, no lists, no contractions.
   g) End with a brief, self-assured closing sentence, NOT "I look forward to hearing from you".

7. VALEDICTION
   Use exactly: <p class="letter-valediction">{valediction}</p>

8. SIGNATURE
   Format: <p class="letter-signature">{candidate}</p>

{rule}
CANDIDATE DATA (for the body):
{rule}
{data}

{rule}
OUTPUT FORMAT:
{rule}
Return ONLY valid HTML: no <html>/<body>/<head> tags, no markdown, no code fences, no preamble.
Output all 8 sections in order using the CSS classes above.

Write the complete letter now:"#,
        rule = SECTION_RULE,
        sender = indented(&sender_lines(req)),
        date = format_letter_date(today),
        recipient = indented(&recipient_lines(req)),
        job_title = req.job_title,
        salutation = salutation(req),
        banned = banned,
        valediction = valediction(req),
        candidate = req.candidate_name,
        data = candidate_data(req),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            company_name: "Northwind Traders".to_string(),
            company_address: "1 Harbour Road, Bristol".to_string(),
            job_title: "Platform Engineer".to_string(),
            job_description: "Run our payments platform.".to_string(),
            candidate_name: "Sam Rivera".to_string(),
            candidate_email: Some("sam@example.com".to_string()),
            candidate_phone: Some(String::new()),
            top_achievements: "Cut p99 latency by 40%".to_string(),
            relevant_skills: "Rust, Postgres".to_string(),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    #[test]
    fn test_format_letter_date() {
        assert_eq!(format_letter_date(date()), "19 February 2026");
        assert_eq!(
            format_letter_date(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()),
            "3 November 2025"
        );
    }

    #[test]
    fn test_sender_lines_skip_empty_contact_details() {
        assert_eq!(sender_lines(&request()), vec!["Sam Rivera", "sam@example.com"]);
    }

    #[test]
    fn test_recipient_lines_without_manager() {
        assert_eq!(
            recipient_lines(&request()),
            vec!["Northwind Traders", "1 Harbour Road, Bristol"]
        );
    }

    #[test]
    fn test_recipient_lines_with_manager() {
        let mut req = request();
        req.hiring_manager_name = Some("Dana Lee".to_string());
        req.hiring_manager_title = Some("Head of Platform".to_string());
        assert_eq!(
            recipient_lines(&req),
            vec![
                "Dana Lee",
                "Head of Platform",
                "Northwind Traders",
                "1 Harbour Road, Bristol"
            ]
        );
    }

    #[test]
    fn test_salutation_and_valediction_follow_manager_name() {
        let mut req = request();
        assert_eq!(salutation(&req), "Dear Hiring Manager,");
        assert_eq!(valediction(&req), "Yours faithfully,");

        req.hiring_manager_name = Some("Dana Lee".to_string());
        assert_eq!(salutation(&req), "Dear Dana Lee,");
        assert_eq!(valediction(&req), "Yours sincerely,");
    }

    #[test]
    fn test_prompt_contains_all_sections() {
        let prompt = build_cover_letter_prompt(&request(), date());
        for class in [
            "sender-block",
            "letter-date",
            "recipient-block",
            "letter-subject",
            "letter-salutation",
            "letter-body",
            "letter-valediction",
            "letter-signature",
        ] {
            assert!(prompt.contains(class), "prompt missing section {class}");
        }
        assert!(prompt.contains("19 February 2026"));
        assert!(prompt.contains("Re: Application for Platform Engineer"));
        assert!(prompt.contains("TARGET ROLE: Platform Engineer at Northwind Traders"));
    }

    #[test]
    fn test_prompt_bans_cliches() {
        let prompt = build_cover_letter_prompt(&request(), date());
        assert!(prompt.contains("\"synergy\""));
        assert!(prompt.contains("\"fast-paced environment\""));
    }

    #[test]
    fn test_prompt_omits_absent_optional_blocks() {
        let prompt = build_cover_letter_prompt(&request(), date());
        assert!(!prompt.contains("EXPERIENCE:"));
        assert!(!prompt.contains("COMPANY NOTES"));
        assert!(!prompt.contains("WHY THIS COMPANY"));
        assert!(!prompt.contains("ADDITIONAL CONTEXT"));
    }

    #[test]
    fn test_prompt_includes_provided_optional_blocks() {
        let mut req = request();
        req.years_of_experience = Some("8 years".to_string());
        req.why_this_role = Some("I like hard problems.".to_string());
        let prompt = build_cover_letter_prompt(&req, date());
        assert!(prompt.contains("EXPERIENCE: 8 years"));
        assert!(prompt.contains("WHY THIS ROLE (candidate's own words):\nI like hard problems."));
    }
}
