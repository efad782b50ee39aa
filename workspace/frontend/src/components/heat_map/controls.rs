use common::GreenIncrease;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SimulationControlsProps {
    pub green_increase: GreenIncrease,
    pub on_change: Callback<GreenIncrease>,
    pub on_simulate: Callback<()>,
}

/// Whether the field text must be overwritten to show `green`.
///
/// An unset value leaves the field alone so partial entries such as `-`
/// survive while the user is typing.
fn needs_sync(field_text: &str, green: GreenIncrease) -> bool {
    !green.is_unset() && GreenIncrease::from_input(field_text) != green
}

/// Green-increase input and the simulate trigger.
#[function_component(SimulationControls)]
pub fn simulation_controls(props: &SimulationControlsProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(props.green_increase, move |green| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                if needs_sync(&input.value(), *green) {
                    input.set_value(&green.input_value());
                }
            }
            || ()
        });
    }

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(GreenIncrease::from_input(&input.value()));
        })
    };

    let onclick = {
        let on_simulate = props.on_simulate.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("User clicked simulate button");
            on_simulate.emit(());
        })
    };

    html! {
        <div class="flex items-center gap-2">
            <label for="green-increase">{"Green Increase (%): "}</label>
            <input
                ref={input_ref}
                id="green-increase"
                class="input input-bordered input-sm w-24"
                type="number"
                min={GreenIncrease::MIN.to_string()}
                max={GreenIncrease::MAX.to_string()}
                step={GreenIncrease::STEP.to_string()}
                {oninput}
            />
            <button class="btn btn-primary btn-sm" {onclick}>{"Simulate"}</button>
        </div>
    }
}
