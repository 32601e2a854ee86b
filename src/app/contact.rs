use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::browser::Browser;
use crate::config::CONTACT_RECIPIENT;
use crate::mail::{ContactForm, Field};
use crate::page::Page;

#[component]
pub fn ContactPage() -> impl IntoView {
    // Fresh on every mount; leaving the page drops it
    let form = RwSignal::new(ContactForm::default());

    view! {
        <Title text=Page::Contact.label() />
        <div class="section contact-page">
            <h2>"Contact Me"</h2>
            <p>"Have a question or want to collaborate? Send me a message!"</p>
            <MessageForm form />
        </div>
    }
}

#[component]
fn MessageForm(form: RwSignal<ContactForm>) -> impl IntoView {
    let browser = use_context::<Browser>().unwrap_or_default();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|f| send(&browser, f, CONTACT_RECIPIENT));
    };
    let message = form.with_untracked(|f| f.get(Field::Message).to_string());

    view! {
        <form class="contact-form" on:submit=on_submit>
            <FormInput field=Field::Name kind="text" form />
            <FormInput field=Field::Email kind="email" form />
            <FormInput field=Field::Subject kind="text" form />
            <textarea
                name=Field::Message.name()
                placeholder=Field::Message.placeholder()
                rows="5"
                required=true
                prop:value=move || form.with(|f| f.get(Field::Message).to_string())
                on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
            >
                {message}
            </textarea>
            <button type="submit">"Send Message"</button>
        </form>
    }
}

#[component]
fn FormInput(field: Field, kind: &'static str, form: RwSignal<ContactForm>) -> impl IntoView {
    let initial = form.with_untracked(|f| f.get(field).to_string());
    view! {
        <input
            type=kind
            name=field.name()
            placeholder=field.placeholder()
            required=true
            value=initial
            prop:value=move || form.with(|f| f.get(field).to_string())
            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
        />
    }
}

/// Hands the message to the visitor's mail client. Nothing is sent from here.
pub fn send(browser: &Browser, form: &ContactForm, recipient: &str) {
    log::info!("handing contact form off to mail client for {recipient}");
    browser.redirect(&form.mailto(recipient));
}
