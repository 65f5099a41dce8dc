use dioxus::prelude::*;
use services::Status;

use crate::vm::StatusVm;

#[component]
pub fn StatusLine(id: &'static str, status: Option<Status>) -> Element {
    let Some(status) = status else {
        return rsx! { p { id, class: "status" } };
    };
    let vm = StatusVm::from(&status);
    rsx! {
        p { id, class: vm.class, role: "status", "{vm.text}" }
    }
}
