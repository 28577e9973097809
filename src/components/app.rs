use super::hero::Hero;
use super::market::MarketSection;
use super::navbar::Navbar;
use super::sections::{Footer, PersonasSection, ProblemSection, TeamSection};
use crate::behaviors::PageController;
use crate::config::PageConfig;
use crate::util::cwarn;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<PageConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Document-level behaviors bind to the rendered markup, so they mount
    // after the first render and unmount with the app.
    {
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let page = PageController::mount(&config)
                .map_err(|e| cwarn(&format!("page controller: {}", e)))
                .ok();
            move || drop(page)
        });
    }

    html! {
        <ContextProvider<Rc<PageConfig>> context={props.config.clone()}>
            <Navbar />
            <main>
                <Hero />
                <ProblemSection />
                <PersonasSection />
                <MarketSection />
                <TeamSection />
            </main>
            <Footer />
        </ContextProvider<Rc<PageConfig>>>
    }
}
