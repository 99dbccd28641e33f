use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{FacebookIcon, Icon, StrokeIcon};
use crate::config::{
    BOOKING_URL, BUSINESS_NAME, EMAIL, FACEBOOK_URL, LOGO_SRC, PHONE, SERVICE_AREA, TAGLINE,
};
use crate::content::{
    anchor_id, stagger_style, ABOUT_PARAGRAPHS, PROCESS_STEPS, SERVICES, STATS,
};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub muted: Option<AttrValue>,
}

/// Small uppercase label over a bold two-tone title.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading reveal">
            <span class="eyebrow">{props.eyebrow.clone()}</span>
            <h2>
                {props.title.clone()}
                {
                    if let Some(muted) = &props.muted {
                        html! { <><br /><span class="muted">{muted.clone()}</span></> }
                    } else {
                        html! {}
                    }
                }
            </h2>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="stats-grid">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <div key={stat.label} class="stat reveal" style={stagger_style(i)}>
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={anchor_id("About")} class="about">
            <div class="about-grid">
                <div class="about-image reveal-left">
                    <div class="about-frame">
                        <img src="/brayden-tricep.png" alt="TruCo Painting Team" />
                        <div class="about-tint"></div>
                    </div>
                    <div class="about-accent"></div>
                </div>
                <div class="about-copy reveal-right">
                    <span class="eyebrow">{"About Us"}</span>
                    <h2>
                        {"Your trusted painting"}
                        <br />
                        <span class="muted">{"professionals."}</span>
                    </h2>
                    <div class="about-paragraphs">
                        { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    </div>
                    <div class="about-signature">
                        <div class="signature-name">{BUSINESS_NAME}</div>
                        <div class="signature-tagline">{TAGLINE}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={anchor_id("Services")} class="services alt-bg">
            <SectionHeading
                eyebrow="Our Services"
                title="Complete painting solutions"
                muted={Some(AttrValue::from("for your home."))}
            />
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <div key={service.title} class="service-card reveal" style={stagger_style(i)}>
                        <div class="service-badge">{service.badge}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id={anchor_id("Process")} class="process">
            <SectionHeading eyebrow="Our Process" title="Simple. Professional. Thorough." />
            <div class="timeline">
                <div class="timeline-line"></div>
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| {
                    // Steps alternate sides of the line on wide screens.
                    let side = if i % 2 == 0 { "left" } else { "right" };
                    html! {
                        <div key={step.number} class={classes!("timeline-step", "reveal", side)} style={stagger_style(i)}>
                            <div class="timeline-text">
                                <div class="step-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                            <div class="timeline-dot"></div>
                            <div class="timeline-spacer"></div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactCardProps {
    icon: Icon,
    label: AttrValue,
    value: AttrValue,
}

#[function_component(ContactCard)]
fn contact_card(props: &ContactCardProps) -> Html {
    html! {
        <div class="contact-card">
            <div class="contact-icon">
                <StrokeIcon icon={props.icon} />
            </div>
            <div class="contact-label">{props.label.clone()}</div>
            <div class="contact-value">{props.value.clone()}</div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={anchor_id("Contact")} class="contact alt-bg">
            <div class="contact-inner">
                <SectionHeading eyebrow="Contact" title="Have questions? Reach out." />
                <p class="contact-intro reveal">
                    {"Want to talk through your project or have a specific question? Feel free to give me a call or send an email. I'm happy to help however I can."}
                </p>
                <div class="contact-grid reveal" style={stagger_style(2)}>
                    <ContactCard icon={Icon::Phone} label="Call or text" value={PHONE} />
                    <ContactCard icon={Icon::Mail} label="Email" value={EMAIL} />
                    <ContactCard icon={Icon::MapPin} label="Service area" value={SERVICE_AREA} />
                </div>
                <div class="contact-cta reveal" style={stagger_style(4)}>
                    <p>{"Ready to get started?"}</p>
                    <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="primary-button">
                        {"SCHEDULE YOUR ESTIMATE"}
                    </a>
                </div>
            </div>
        </section>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BUSINESS_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <img src={LOGO_SRC} alt={BUSINESS_NAME} class="footer-logo" />
                <div class="footer-copy">{copyright_line(year)}</div>
                <div class="footer-social">
                    <a href={FACEBOOK_URL} target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                        <FacebookIcon />
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_business_and_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 TruCo Painting. All rights reserved."
        );
    }
}
