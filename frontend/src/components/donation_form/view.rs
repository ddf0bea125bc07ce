//! View rendering for the donation form component.
//!
//! One column of labeled inputs mirroring the intake sheet, a banner area
//! for validation and submission feedback, the action buttons, and the staff
//! unlock gate. Submission failures show a generic banner; the details only
//! go to the console.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::{DonationFormComponent, SubmitState};

pub fn view(component: &DonationFormComponent, ctx: &Context<DonationFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <main class="donation-root">
            <h1>{"Hope's Corner Donations"}</h1>
            { build_banner(component) }
            <form class="donation-form">
                { text_input(link, "Donor Name", "text", "John Doe", &component.record.name, Field::Name) }
                { text_input(link, "Date of Donation", "date", "", &component.record.date, Field::Date) }
                { text_input(link, "Email (Optional)", "email", "you@example.com", &component.record.email, Field::Email) }
                { donation_type_select(link, &component.record.donation_type) }
                { text_input(link, "Organization (Optional)", "text", "", &component.record.organization, Field::Organization) }
                { text_input(link, "Address (Optional)", "text", "", &component.record.address, Field::Address) }
                { text_input(link, "Phone (Optional)", "tel", "(650) 555-0100", &component.record.phone, Field::Phone) }
                { text_input(link, "Estimated Value ($)", "number", "100.00", &component.record.estimated_value, Field::EstimatedValue) }
                { description_textarea(link, &component.record.item_description) }
                { build_actions(component, link) }
            </form>
            { build_staff_gate(component, link) }
        </main>
    }
}

fn build_banner(component: &DonationFormComponent) -> Html {
    if !component.validation_errors.is_empty() {
        return html! {
            <ul class="banner banner-error">
                { for component.validation_errors.iter().map(|e| html! { <li>{ e }</li> }) }
            </ul>
        };
    }
    match component.submit_state {
        SubmitState::Success => html! {
            <p class="banner banner-success">{"Donation saved to SharePoint."}</p>
        },
        SubmitState::Error => html! {
            <p class="banner banner-error">{"Something went wrong. Please try again."}</p>
        },
        _ => html! {},
    }
}

fn text_input(
    link: &Scope<DonationFormComponent>,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    field: Field,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <input
                type={input_type.to_string()}
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}

fn donation_type_select(link: &Scope<DonationFormComponent>, value: &str) -> Html {
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateField(Field::DonationType, select.value())
    });
    html! {
        <div class="form-field">
            <label>{"Type of Donation"}</label>
            <select {onchange}>
                <option value="" selected={value.is_empty()}>{"Select donation type"}</option>
                <option value="Cash" selected={value == "Cash"}>{"Cash"}</option>
                <option value="Merchandise" selected={value == "Merchandise"}>{"Merchandise"}</option>
                <option value="Service" selected={value == "Service"}>{"Service"}</option>
            </select>
        </div>
    }
}

fn description_textarea(link: &Scope<DonationFormComponent>, value: &str) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::UpdateField(Field::ItemDescription, input.value())
    });
    html! {
        <div class="form-field">
            <label>{"Donated Items (one per line)"}</label>
            <textarea rows="3" value={value.to_string()} {oninput} />
        </div>
    }
}

fn build_actions(component: &DonationFormComponent, link: &Scope<DonationFormComponent>) -> Html {
    let name_missing = component.record.name.trim().is_empty();
    let receipt_label = if component.receipt_busy {
        "Generating Receipt..."
    } else if name_missing {
        "Enter Name to Download"
    } else {
        "Download Receipt"
    };

    html! {
        <div class="form-actions">
            {
                // Staff mode is receipts-only; the save action disappears.
                if !component.staff_unlocked {
                    let save_label = if component.is_submitting() {
                        "Saving..."
                    } else {
                        "Save Donation to SharePoint"
                    };
                    html! {
                        <button
                            type="button"
                            disabled={component.is_submitting()}
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            { save_label }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <button
                type="button"
                disabled={name_missing || component.receipt_busy}
                onclick={link.callback(|_| Msg::DownloadReceipt)}
            >
                { receipt_label }
            </button>
        </div>
    }
}

fn build_staff_gate(
    component: &DonationFormComponent,
    link: &Scope<DonationFormComponent>,
) -> Html {
    if component.staff_unlocked {
        return html! {
            <p class="staff-note">{"Staff mode: generate receipts without saving donations."}</p>
        };
    }

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateStaffCode(input.value())
    });

    html! {
        <div class="staff-gate">
            <label>{"Staff access code"}</label>
            <input type="password" value={component.staff_code.clone()} {oninput} />
            <button type="button" onclick={link.callback(|_| Msg::VerifyStaff)}>
                {"Unlock staff mode"}
            </button>
            {
                if let Some(err) = &component.staff_error {
                    html! { <p class="staff-error">{ err }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
