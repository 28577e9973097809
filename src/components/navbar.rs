use yew::prelude::*;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#problem", "Problem"),
    ("#personas", "Who It's For"),
    ("#market", "Market"),
    ("#team", "Team"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-container">
                <a class="navbar-brand" href="#home">
                    <i class="fas fa-book-open"></i>
                    <span>{"Touch Learn"}</span>
                </a>
                <ul class="navbar-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item"><a class="nav-link" href={*href}>{ *label }</a></li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
