use leptos::prelude::*;
use leptos_meta::Title;

use super::footer::Footer;
use super::header::Header;
use super::hero::Hero;
use super::indicators::ScrollIndicators;
use super::projects::Projects;
use super::resume::Resume;
use super::tech::TechGrid;
use super::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Header />
        <main class="flex flex-col w-full">
            <Hero />
            <Resume />
            <TechGrid />
            <Projects />
            <Testimonials />
        </main>
        <Footer />
        <ScrollIndicators />
    }
}
