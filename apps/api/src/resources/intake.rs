use chrono::NaiveDate;

use crate::models::{NewResource, ResourceSubmission};

/// Checks a submitted "add resource" form and normalizes it for the backend.
///
/// Required: name, rate, an ISO available date and at least one domain.
/// Blank domains, skills without a name or level, and past titles without a
/// name or years are dropped. The resource is stamped with the caller's
/// organization and starts without a team.
///
/// All failing fields are reported together, in form order.
pub fn prepare_submission(
    org_id: &str,
    form: NewResource,
) -> Result<ResourceSubmission, Vec<String>> {
    let mut errors = Vec::new();

    let name = form
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    if name.is_none() {
        errors.push("Name is required".to_string());
    }

    let rate = form.rate.filter(|r| !r.is_blank());
    if rate.is_none() {
        errors.push("Rate is required".to_string());
    }

    let available_date = form
        .available_date
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    match available_date.as_deref() {
        None => errors.push("Available Date is required".to_string()),
        Some(d) if NaiveDate::parse_from_str(d, "%Y-%m-%d").is_err() => {
            errors.push(format!("Available Date '{d}' must be a date in YYYY-MM-DD form"))
        }
        Some(_) => {}
    }

    let domain: Vec<String> = form
        .domain
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();
    if domain.is_empty() {
        errors.push("Domain is required".to_string());
    }

    let (Some(name), Some(rate), Some(available_date), true) =
        (name, rate, available_date, errors.is_empty())
    else {
        return Err(errors);
    };

    let skills = form
        .skills
        .into_iter()
        .filter(|(skill, detail)| {
            !skill.trim().is_empty() && detail.level.as_ref().is_some_and(|l| !l.is_blank())
        })
        .collect();

    let past_job_titles = form
        .past_job_titles
        .into_iter()
        .filter(|(title, detail)| {
            !title.trim().is_empty() && detail.years.as_ref().is_some_and(|y| !y.is_blank())
        })
        .collect();

    Ok(ResourceSubmission {
        name,
        rate,
        available_date,
        domain,
        skills,
        past_job_titles,
        org_id: org_id.to_string(),
        team_id: None,
    })
}
