use yew::prelude::*;

/// Page sections in document order.
pub const SECTION_ORDER: [&str; 5] = ["home", "problem", "personas", "market", "team"];

/// Reveal class for a section: even positions fade in, odd ones slide in.
pub fn section_reveal_class(id: &str) -> &'static str {
    match SECTION_ORDER.iter().position(|s| *s == id) {
        Some(i) if i % 2 == 1 => "slide-in-left",
        _ => "fade-in",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InfoCardProps {
    /// Card marker class, e.g. `problem-card`.
    pub kind: &'static str,
    /// Reveal animation class.
    pub reveal: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class={classes!(props.kind, props.reveal)}>
            <div class="card-icon"><i class={props.icon}></i></div>
            <h3>{ props.title }</h3>
            <p>{ props.body }</p>
        </div>
    }
}

type CardCopy = (&'static str, &'static str, &'static str);

const PROBLEMS: [CardCopy; 3] = [
    ("fas fa-hand-pointer", "Screens Without Guidance", "Most learning apps assume a child can already read the instructions."),
    ("fas fa-chalkboard-teacher", "Stretched Classrooms", "One teacher for forty students leaves little time for hands-on practice."),
    ("fas fa-language", "Language Barriers", "Content rarely arrives in the language a child speaks at home."),
];

const PERSONAS: [CardCopy; 3] = [
    ("fas fa-child", "Early Learners", "Ages three to eight, learning letters, numbers and shapes by touch."),
    ("fas fa-user-friends", "Parents", "Want screen time that teaches, with progress they can actually see."),
    ("fas fa-school", "Schools", "Need lessons that run on shared, low-cost tablets with no setup."),
];

const TEAM: [CardCopy; 3] = [
    ("fas fa-user-tie", "Founder & CEO", "Former primary school teacher and curriculum designer."),
    ("fas fa-code", "Founder & CTO", "Builds offline-first learning software for low-end devices."),
    ("fas fa-palette", "Design Lead", "Designs touch interactions with children, not just for them."),
];

fn card_grid(kind: &'static str, cards: &[CardCopy]) -> Html {
    cards
        .iter()
        .enumerate()
        .map(|(i, &(icon, title, body))| {
            let reveal = if i % 2 == 0 { "slide-in-left" } else { "slide-in-right" };
            html! { <InfoCard {kind} {reveal} {icon} {title} {body} /> }
        })
        .collect()
}

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    html! {
        <section id="problem" class={classes!("problem-section", section_reveal_class("problem"))}>
            <h2 class="section-title">{"The Problem"}</h2>
            <div class="card-grid">{ card_grid("problem-card", &PROBLEMS) }</div>
        </section>
    }
}

#[function_component(PersonasSection)]
pub fn personas_section() -> Html {
    html! {
        <section id="personas" class={classes!("personas-section", section_reveal_class("personas"))}>
            <h2 class="section-title">{"Who It's For"}</h2>
            <div class="card-grid">{ card_grid("persona-card", &PERSONAS) }</div>
        </section>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section id="team" class={classes!("team-section", section_reveal_class("team"))}>
            <h2 class="section-title">{"Our Team"}</h2>
            <div class="card-grid">{ card_grid("team-card", &TEAM) }</div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"© Touch Learn. Learning at the tip of every finger."}</p>
            <a href="#home">{"Back to top"}</a>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_reveal_classes_by_position() {
        let classes: Vec<_> = SECTION_ORDER.iter().map(|id| section_reveal_class(id)).collect();
        assert_eq!(classes, ["fade-in", "slide-in-left", "fade-in", "slide-in-left", "fade-in"]);
        assert_eq!(section_reveal_class("unknown"), "fade-in");
    }
}
