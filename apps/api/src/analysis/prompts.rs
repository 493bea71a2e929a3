// All LLM prompt constants for the analysis module.

/// Job description used when the caller does not supply one.
pub const DEFAULT_JOB_DESCRIPTION: &str = "\
We are hiring a Software Engineer to design, build, and maintain scalable \
web applications and services. Responsibilities include writing clean, \
well-tested code, collaborating with product and design, participating in \
code reviews, and owning features from design through deployment. \
Requirements: a degree in Computer Science or equivalent experience, strong \
proficiency in at least one modern programming language, experience with \
REST APIs, databases (SQL or NoSQL), version control with Git, and cloud \
platforms (AWS, GCP, or Azure). Nice to have: CI/CD pipelines, Docker, \
Kubernetes, and experience with agile teams.";

/// Instructions prefixed to every analysis prompt. The resume and job
/// description are appended under labeled sections rather than substituted
/// into the template, so their content is never interpreted as placeholders.
pub const ANALYSIS_PROMPT_INSTRUCTIONS: &str = r#"You are an expert ATS (Applicant Tracking System) and technical recruiter.
Evaluate the following resume against the job description using these six criteria:

1. Relevance of experience to the role
2. Keyword match between the resume and the job description
3. Formatting and ATS readability
4. Contact information completeness
5. Presence of standard resume sections (education, skills, experience, projects, achievements, certifications)
6. Quantifiable achievements

Score breakdown (must sum to 100):
- relevance: 0-40
- keyword_match: 0-30
- formatting: 0-20
- contact_completeness: 0-10

Return ONLY a valid JSON object with this EXACT schema (no extra text, no markdown):
{
  "ats_score": {
    "total": 0,
    "relevance": 0,
    "keyword_match": 0,
    "formatting": 0,
    "contact_completeness": 0
  },
  "missing_sections": {
    "critical": [],
    "recommended": []
  },
  "missing_skills": {
    "must_have": [],
    "nice_to_have": []
  },
  "missing_achievements": [],
  "contact_info": {
    "name": null,
    "email": null,
    "phone": null,
    "linkedin": null
  },
  "suggestions": []
}
"#;
