// All LLM prompt constants for the Interview module.
// Prompts embed the user's texts verbatim; keep the wording stable.

/// Question generation prompt template.
/// Replace `{jd_text}` and `{resume_text}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = "\
Based on the job description and résumé provided below, generate exactly 5 custom \
interview questions that focus on how the candidate's experience and skills match \
the requirements of the job description. These questions should assess the \
candidate’s suitability for the role. Do not include analysis, commentary, or \
explanation — only list the 5 questions.

Job Description:
{jd_text}

Résumé:
{resume_text}";

/// Header of the scoring prompt; one `Q<i>`/`A` block per answer follows.
pub const SCORING_PROMPT_HEADER: &str = "Please score the following candidate answers \
on a scale of 1 to 10. Just provide the score for each without explanation or commentary.\n";

pub fn build_question_prompt(jd_text: &str, resume_text: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text)
}

/// Builds the scoring prompt: header plus `Q<i>: <question>\nA: <answer>\n`
/// blocks, numbered from 1, in question order.
pub fn build_scoring_prompt(questions: &[String], answers: &[String]) -> String {
    let mut prompt = String::from(SCORING_PROMPT_HEADER);
    for (i, (question, answer)) in questions.iter().zip(answers).enumerate() {
        prompt.push_str(&format!("Q{}: {}\nA: {}\n", i + 1, question, answer));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_embeds_both_texts_verbatim() {
        let prompt = build_question_prompt("Senior Rust Engineer, 5+ years", "Built axum services");
        assert!(prompt.contains("Senior Rust Engineer, 5+ years"));
        assert!(prompt.contains("Built axum services"));
        assert!(prompt.contains("Job Description:"));
        assert!(prompt.contains("Résumé:"));
    }

    #[test]
    fn test_question_prompt_asks_for_five() {
        let prompt = build_question_prompt("jd", "resume");
        assert!(prompt.contains("exactly 5"));
    }

    #[test]
    fn test_scoring_prompt_numbers_pairs_from_one_in_order() {
        let questions = vec!["Q1?".to_string(), "Q2?".to_string()];
        let answers = vec!["A1".to_string(), "A2".to_string()];

        let prompt = build_scoring_prompt(&questions, &answers);
        assert!(prompt.contains("Q1: Q1?\nA: A1\n"));
        assert!(prompt.contains("Q2: Q2?\nA: A2\n"));

        let first = prompt.find("Q1: Q1?").unwrap();
        let second = prompt.find("Q2: Q2?").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_scoring_prompt_starts_with_instruction_header() {
        let prompt = build_scoring_prompt(&["Q?".to_string()], &["A".to_string()]);
        assert!(prompt.starts_with("Please score the following candidate answers"));
    }
}
