use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation;
use crate::components::motion::{Reveal, Trigger};
use crate::components::ui::{
    Button, ButtonSize, ButtonType, ButtonVariant, Icon, IconKind, Section, SectionBackground,
};
use crate::config;
use crate::i18n::{use_translation, Namespace, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Email, Field::Company, Field::Subject, Field::Message];

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Same rule as the browser's `required` attribute: any non-empty value
    /// counts, whitespace included.
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .filter(|field| field.required())
            .all(|field| !self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    Submit,
    /// The simulated round trip finished.
    Delivered,
    /// Back to an empty form from the success panel.
    Again,
}

impl ContactForm {
    pub fn next(&self, action: FormAction) -> Option<Self> {
        match (self.phase, action) {
            (Phase::Editing, FormAction::Edit(field, value)) => {
                let mut next = self.clone();
                next.fields.set(field, value);
                Some(next)
            }
            (Phase::Editing, FormAction::Submit) if self.fields.is_complete() => Some(Self {
                phase: Phase::Submitting,
                ..self.clone()
            }),
            (Phase::Submitting, FormAction::Delivered) => Some(Self {
                fields: ContactFields::default(),
                phase: Phase::Submitted,
            }),
            (Phase::Submitted, FormAction::Again) => Some(Self::default()),
            _ => None,
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        match self.next(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[derive(Properties, PartialEq)]
struct InfoRowProps {
    icon: IconKind,
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    href: Option<AttrValue>,
}

#[function_component(InfoRow)]
fn info_row(props: &InfoRowProps) -> Html {
    html! {
        <div class="contact-info__row">
            <span class="contact-info__icon"><Icon kind={props.icon} /></span>
            <div>
                <p class="contact-info__label">{ props.label.clone() }</p>
                if let Some(href) = &props.href {
                    <a class="contact-info__value" href={href.clone()}>{ props.value.clone() }</a>
                } else {
                    <p class="contact-info__value">{ props.value.clone() }</p>
                }
            </div>
        </div>
    }
}

fn field_input(t: &Translator, form: &UseReducerHandle<ContactForm>, field: Field) -> Html {
    let key = field.key();
    let value = form.fields.get(field).to_string();
    let disabled = form.phase != Phase::Editing;
    let placeholder = t.t(&format!("form.{key}Placeholder"));
    let label = if field.required() {
        format!("{} *", t.t(&format!("form.{key}")))
    } else {
        t.t(&format!("form.{key}"))
    };

    let control = if field == Field::Message {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                    form.dispatch(FormAction::Edit(field, area.value()));
                }
            })
        };
        html! {
            <textarea
                id={key}
                name={key}
                rows="5"
                class="form__control"
                {placeholder}
                {value}
                {oninput}
                {disabled}
                required={field.required()}
            />
        }
    } else {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                    form.dispatch(FormAction::Edit(field, input.value()));
                }
            })
        };
        html! {
            <input
                type={if field == Field::Email { "email" } else { "text" }}
                id={key}
                name={key}
                class="form__control"
                {placeholder}
                {value}
                {oninput}
                {disabled}
                required={field.required()}
            />
        }
    };

    html! {
        <div class={classes!("form__field", matches!(field, Field::Subject | Field::Message).then_some("form__field--wide"))}>
            <label for={key} class="form__label">{ label }</label>
            { control }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> HtmlResult {
    let t = use_translation(Namespace::Contact)?;
    let form = use_reducer(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.next(FormAction::Submit).is_none() {
                return;
            }
            form.dispatch(FormAction::Submit);
            let form = form.clone();
            spawn_local(async move {
                // No backend yet; the message is only acknowledged.
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                info!("Contact form submitted");
                form.dispatch(FormAction::Delivered);
            });
        })
    };

    let again = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Again))
    };

    let panel = match form.phase {
        Phase::Submitted => html! {
            <div class="contact-success" role="status">
                <div class="contact-success__icon"><Icon kind={IconKind::Send} /></div>
                <h3 class="contact-success__title">{ t.t("form.success.title") }</h3>
                <p class="contact-success__text">{ t.t("form.success.message") }</p>
                <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={again}>
                    { t.t("form.success.again") }
                </Button>
            </div>
        },
        Phase::Editing | Phase::Submitting => {
            let submitting = form.phase == Phase::Submitting;
            html! {
                <form class="form card" {onsubmit}>
                    <div class="form__grid">
                        { for Field::ALL.into_iter().map(|field| field_input(&t, &form, field)) }
                    </div>
                    <p class="form__hint">{ t.t("form.required") }</p>
                    <Button kind={ButtonType::Submit} size={ButtonSize::Lg} disabled={submitting} class="w-full">
                        if submitting {
                            { t.t("form.sending") }
                        } else {
                            { t.t("form.submit") }
                            <Icon kind={IconKind::Send} class="btn__icon" />
                        }
                    </Button>
                </form>
            }
        }
    };

    Ok(html! {
        <div class="page page--contact">
            <section class="hero hero--light">
                <div class="container hero__inner hero__inner--center">
                    <Reveal preset={animation::FADE_IN} trigger={Trigger::Mount}>
                        <h1 class="hero__title">{ t.t("hero.title") }</h1>
                        <p class="hero__subtitle">{ t.t("hero.subtitle") }</p>
                    </Reveal>
                </div>
            </section>

            <Section background={SectionBackground::Default} animate={false}>
                <div class="contact-layout">
                    <Reveal preset={animation::SLIDE_IN_LEFT} class="contact-info">
                        <h2 class="contact-info__title">{ t.t("info.title") }</h2>
                        <p class="contact-info__text">{ t.t("info.description") }</p>
                        <InfoRow
                            icon={IconKind::Mail}
                            label={t.t("info.email.label")}
                            value={config::CONTACT_EMAIL}
                            href={format!("mailto:{}", config::CONTACT_EMAIL)}
                        />
                        <InfoRow
                            icon={IconKind::Phone}
                            label={t.t("info.phone.label")}
                            value={config::CONTACT_PHONE}
                            href={format!("tel:{}", config::CONTACT_PHONE.replace([' ', '(', ')'], ""))}
                        />
                        <InfoRow
                            icon={IconKind::MapPin}
                            label={t.t("info.address.label")}
                            value={t.t("info.address.value")}
                        />
                    </Reveal>
                    <Reveal preset={animation::SLIDE_IN_RIGHT}>
                        { panel }
                    </Reveal>
                </div>
            </Section>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in [
            (Field::Name, "Ayşe"),
            (Field::Email, "ayse@example.com"),
            (Field::Subject, "Otomasyon"),
            (Field::Message, "Merhaba"),
        ] {
            form = form.next(FormAction::Edit(field, value.into())).unwrap();
        }
        form
    }

    #[test]
    fn submission_runs_editing_submitting_submitted() {
        let form = filled();
        assert!(form.fields.is_complete());

        let sending = form.next(FormAction::Submit).unwrap();
        assert_eq!(sending.phase, Phase::Submitting);
        assert_eq!(sending.fields.name, "Ayşe");

        let done = sending.next(FormAction::Delivered).unwrap();
        assert_eq!(done.phase, Phase::Submitted);
        assert_eq!(done.fields, ContactFields::default());
    }

    #[test]
    fn company_is_optional_others_are_not() {
        let form = filled();
        assert!(form.fields.company.is_empty());
        assert!(form.next(FormAction::Submit).is_some());

        let no_subject = form.next(FormAction::Edit(Field::Subject, String::new())).unwrap();
        assert_eq!(no_subject.next(FormAction::Submit), None);
    }

    #[test]
    fn whitespace_that_passes_required_still_submits() {
        let form = filled()
            .next(FormAction::Edit(Field::Subject, " ".into()))
            .unwrap();
        let after = Rc::new(form).reduce(FormAction::Submit);
        assert_eq!(after.phase, Phase::Submitting);
        assert_eq!(after.fields.subject, " ");
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let sending = Rc::new(filled().next(FormAction::Submit).unwrap());
        let again = sending.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&sending, &again));
        assert_eq!(sending.next(FormAction::Edit(Field::Name, "x".into())), None);
    }

    #[test]
    fn success_panel_can_start_over() {
        let done = filled()
            .next(FormAction::Submit)
            .and_then(|f| f.next(FormAction::Delivered))
            .unwrap();
        assert_eq!(done.next(FormAction::Again), Some(ContactForm::default()));
        assert_eq!(ContactForm::default().next(FormAction::Delivered), None);
    }
}
