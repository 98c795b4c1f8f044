// Prompt template for CV-vs-job analysis.
// Placeholders are filled by `build_analysis_prompt`; nothing else edits the text.

pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career advisor and CV analyst. Analyze the following CV against the job description provided.

CV Content:
{cv_text}

Job Description:
{job_description}

CRITICAL: First, determine if the candidate's background is realistic for this role. If the CV is from a completely different field (e.g., art background applying for software engineering, or healthcare applying for finance), you MUST be honest and state that this is not a suitable match.

Please provide:

1. REALISTIC FIT ASSESSMENT:
   - Is this CV genuinely suitable for this role?
   - If not, explain why and suggest more appropriate career paths

2. SKILLS MATCH (only if realistic fit):
   - Which required skills does the candidate have?
   - Which required skills are missing?

3. EXPERIENCE ALIGNMENT (only if realistic fit):
   - Does their experience match the role requirements?
   - What relevant experience do they have?

4. GAPS & WEAKNESSES:
   - What are the major gaps?
   - What needs improvement?

5. STRENGTHS:
   - What are the candidate's strongest points?

6. RECOMMENDATIONS:
   - If suitable: Specific improvements for the CV, including rewritten bullet points tailored to this job
   - If unsuitable: Alternative career paths that match their background

7. OVERALL SCORE (0-100):
   - Only give a score above 40 if the candidate is realistically suitable
   - If unsuitable, score should be below 30

Be honest and helpful. Don't try to force-fit an unsuitable candidate."#;

/// Fills the analysis template with the extracted CV text and the pasted job description.
///
/// Both inputs are inserted verbatim. Only the template tail is searched for the
/// job description placeholder, so a CV containing `{job_description}` stays untouched.
pub fn build_analysis_prompt(cv_text: &str, job_description: &str) -> String {
    let (head, tail) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{cv_text}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));
    let tail = tail.replacen("{job_description}", job_description, 1);

    let mut prompt = String::with_capacity(head.len() + cv_text.len() + tail.len());
    prompt.push_str(head);
    prompt.push_str(cv_text);
    prompt.push_str(&tail);
    prompt
}
