use std::collections::BTreeMap;

use machina_core::{Activation, Initialization, Parameters, Propagation, Training};

/// A configuration value marshalled from the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl ConfigValue {
    fn as_dimension(&self) -> Option<usize> {
        match self {
            ConfigValue::Number(n) if n.is_finite() && *n >= 0.0 => Some(*n as usize),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn as_boolean(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Strategy selectors, one tagged variant per family. String keys from the
/// host are mapped to these variants here and nowhere else; the core only
/// ever sees the built strategy objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivationChoice {
    Sigmoid,
    Softplus,
    HyperbolicTan,
}

impl ActivationChoice {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sigmoid" => Some(ActivationChoice::Sigmoid),
            "softplus" => Some(ActivationChoice::Softplus),
            "tanh" | "hyperbolic_tan" => Some(ActivationChoice::HyperbolicTan),
            _ => None,
        }
    }

    fn build(self) -> Activation {
        match self {
            ActivationChoice::Sigmoid => Activation::sigmoid(),
            ActivationChoice::Softplus => Activation::softplus(),
            ActivationChoice::HyperbolicTan => Activation::hyperbolic_tan(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitializationChoice {
    Random,
}

impl InitializationChoice {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(InitializationChoice::Random),
            _ => None,
        }
    }

    fn build(self) -> Initialization {
        match self {
            InitializationChoice::Random => Initialization::uniform(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropagationChoice {
    DotProduct,
}

impl PropagationChoice {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dotprod" | "dot" => Some(PropagationChoice::DotProduct),
            _ => None,
        }
    }

    fn build(self) -> Propagation {
        match self {
            PropagationChoice::DotProduct => Propagation::dot_product(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrainingChoice {
    Backpropagation,
}

impl TrainingChoice {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "backPropogation" | "backpropagation" => Some(TrainingChoice::Backpropagation),
            _ => None,
        }
    }

    fn build(self) -> Training {
        match self {
            TrainingChoice::Backpropagation => Training::backpropagation(),
        }
    }
}

/// Builds a [`Parameters`] snapshot from a field-name-keyed configuration map.
///
/// Known fields overwrite the defaults; anything unrecognized, a wrong-typed
/// value or an unknown strategy name included, is skipped without error so the
/// prior default stays in place. Field names follow the host convention
/// (`hiddenLayers`, `biasTerm`, ...), with the historical `propogation`
/// spelling accepted alongside the corrected one.
pub fn parameters_from_config(fields: &BTreeMap<String, ConfigValue>) -> Parameters {
    let mut params = Parameters::new();
    for (key, value) in fields {
        params = apply_field(params, key, value);
    }
    params
}

fn apply_field(params: Parameters, key: &str, value: &ConfigValue) -> Parameters {
    match key {
        "inputs" => match value.as_dimension() {
            Some(n) => params.inputs(n),
            None => params,
        },
        "outputs" => match value.as_dimension() {
            Some(n) => params.outputs(n),
            None => params,
        },
        "hiddenLayers" => match value.as_dimension() {
            Some(n) => params.hidden_layers(n),
            None => params,
        },
        "hiddenSize" => match value.as_dimension() {
            Some(n) => params.hidden_size(n),
            None => params,
        },
        "biasTerm" => match value.as_boolean() {
            Some(b) => params.bias_term(b),
            None => params,
        },
        "rate" => match value.as_number() {
            Some(r) => params.rate(r),
            None => params,
        },
        "activation" | "act" => match value.as_text().and_then(ActivationChoice::from_name) {
            Some(choice) => params.activation(choice.build()),
            None => params,
        },
        "initialization" | "init" => {
            match value.as_text().and_then(InitializationChoice::from_name) {
                Some(choice) => params.initialization(choice.build()),
                None => params,
            }
        }
        "propogation" | "propagation" | "prop" => {
            match value.as_text().and_then(PropagationChoice::from_name) {
                Some(choice) => params.propagation(choice.build()),
                None => params,
            }
        }
        "training" | "train" => match value.as_text().and_then(TrainingChoice::from_name) {
            Some(choice) => params.training(choice.build()),
            None => params,
        },
        _ => {
            log::debug!("ignoring unknown configuration field `{key}`");
            params
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
