//! Introduction messages from an idea's creator to a matched mentor.

use super::models::{Creator, IdeaStatement, IntroductionMessage, Mentor, Tone};

const MAX_CONNECTION_POINTS: usize = 3;
const UNTITLED: &str = "my project";

/// Substring containment in either direction, case-insensitive
fn overlaps(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

/// Idea terms (technology, sector, location) echoed somewhere in the mentor's profile
pub fn connection_points(idea: &IdeaStatement, mentor: &Mentor) -> Vec<String> {
    let lived = &mentor.lived_experience;
    let profile: Vec<&str> = mentor
        .expertise
        .iter()
        .chain(&mentor.sectors)
        .chain(&lived.founded)
        .chain(&lived.worked)
        .chain(&lived.projects)
        .map(String::as_str)
        .chain(std::iter::once(mentor.location.as_str()))
        .collect();

    let mut points: Vec<String> = Vec::new();
    let candidates = idea
        .technologies()
        .into_iter()
        .chain(idea.sector())
        .chain(idea.location());

    for term in candidates {
        if points.len() == MAX_CONNECTION_POINTS {
            break;
        }
        let shared = profile.iter().any(|p| overlaps(p, term));
        if shared && !points.iter().any(|p| p.eq_ignore_ascii_case(term)) {
            points.push(term.to_string());
        }
    }

    points
}

fn intimacy_note(mentor: &Mentor) -> String {
    let lived = &mentor.lived_experience;
    if !lived.founded.is_empty() {
        format!(
            "{} founded {} and speaks from lived experience of building in this space.",
            mentor.name,
            lived.founded.join(" and ")
        )
    } else if lived.years_experience > 0 {
        format!(
            "{} brings {} years of lived experience in this field.",
            mentor.name, lived.years_experience
        )
    } else {
        format!(
            "{} was chosen for lived experience in this field rather than titles.",
            mentor.name
        )
    }
}

/// Draft the first message `creator` sends to `mentor` about `idea`.
///
/// `share_worthy` adds a prompt inviting the creator to share the new connection.
pub fn generate_introduction(
    idea: &IdeaStatement,
    mentor: &Mentor,
    creator: &Creator,
    share_worthy: bool,
) -> IntroductionMessage {
    let title = idea.title().unwrap_or(UNTITLED);
    let points = connection_points(idea, mentor);
    let tone = if points.is_empty() { Tone::Respectful } else { Tone::Warm };
    let note = intimacy_note(mentor);

    let subject = format!("{} would value your guidance on \"{}\"", creator.name, title);

    let greeting = match tone {
        Tone::Warm => format!("Hi {},", mentor.name),
        Tone::Respectful => format!("Dear {},", mentor.name),
    };

    let mut intro = format!("My name is {}", creator.name);
    if let Some(bio) = creator.bio.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
        intro.push_str(&format!(", {}", bio));
    }
    intro.push_str(&format!(". I am working on \"{}\"", title));
    match (idea.sector(), idea.location()) {
        (Some(sector), Some(location)) => intro.push_str(&format!(", a {} project in {}", sector, location)),
        (Some(sector), None) => intro.push_str(&format!(", a {} project", sector)),
        (None, Some(location)) => intro.push_str(&format!(", based in {}", location)),
        (None, None) => {}
    }
    intro.push('.');

    let suggested_ask = if mentor.available_slots >= 3 {
        format!("a 30-minute call this week to get your feedback on \"{}\"", title)
    } else {
        format!("a short exchange when your schedule allows, about \"{}\"", title)
    };

    let mut paragraphs = vec![greeting, intro];
    if !points.is_empty() {
        paragraphs.push(format!(
            "I reached out because we share common ground: {}.",
            points.join(", ")
        ));
    }
    paragraphs.push(note.clone());
    paragraphs.push(format!("Would you be open to {}?", suggested_ask));
    paragraphs.push(format!("Best regards,\n{}", creator.name));

    let share_prompt = share_worthy.then(|| {
        format!(
            "{} is now connected with {} on \"{}\". Share this milestone with your network?",
            creator.name, mentor.name, title
        )
    });

    IntroductionMessage {
        subject,
        body: paragraphs.join("\n\n"),
        tone,
        suggested_ask,
        intimacy_note: note,
        share_prompt,
    }
}
