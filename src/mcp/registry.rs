//! Tool registry
//!
//! Maps each tool name to its handler together with the title, description
//! and input schema advertised through `tools/list`. The registry is built
//! once at startup and shared read-only by every transport.

use super::models::*;
use crate::error::ToolError;
use crate::shop::toolset;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

type Handler = Box<dyn Fn(Value) -> Result<Value, ToolError> + Send + Sync>;

/// A single registered tool
pub struct ToolDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    handler: Handler,
}

impl ToolDefinition {
    /// Wraps a typed operation so it can be called with raw JSON arguments.
    ///
    /// Arguments are decoded into `I`; a decode failure becomes
    /// [`ToolError::InvalidArguments`]. The operation's output is encoded back
    /// to JSON.
    pub fn new<I, O, F>(
        name: &'static str,
        title: &'static str,
        description: &'static str,
        input_schema: Value,
        op: F,
    ) -> Self
    where
        I: DeserializeOwned + 'static,
        O: Serialize + 'static,
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        let handler: Handler = Box::new(move |args: Value| {
            let input: I = serde_json::from_value(args).map_err(|source| {
                ToolError::InvalidArguments {
                    tool: name.to_string(),
                    source,
                }
            })?;
            serde_json::to_value(op(input)).map_err(|source| ToolError::Serialization {
                tool: name.to_string(),
                source,
            })
        });

        Self {
            name,
            title,
            description,
            input_schema,
            handler,
        }
    }

    /// Returns the `tools/list` entry for this tool.
    pub fn describe(&self) -> Value {
        json!({
            "name": self.name,
            "title": self.title,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

/// Ordered collection of tools, looked up by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool. A tool registered under an existing name replaces it.
    pub fn register(&mut self, tool: ToolDefinition) -> &mut Self {
        self.tools.retain(|t| t.name != tool.name);
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Entries for the `tools/list` response, in registration order
    pub fn definitions(&self) -> Vec<Value> {
        self.tools.iter().map(ToolDefinition::describe).collect()
    }

    /// Invokes `name` with `args`. Missing (`null`) arguments count as `{}`.
    pub fn call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = if args.is_null() { json!({}) } else { args };
        (tool.handler)(args)
    }

    /// Builds the registry holding the seven shopping tools.
    pub fn shopping() -> Self {
        let mut registry = Self::new();
        registry
            .register(ToolDefinition::new(
                SEARCH_ITEM,
                "Search items",
                "Returns the makeup catalog: five products, each with travel and regular sizes, color options and fixed prices.",
                json!({
                    "type": "object",
                    "properties": {
                        "search_phrase": { "type": "string" }
                    },
                    "required": ["search_phrase"]
                }),
                toolset::search_item,
            ))
            .register(ToolDefinition::new(
                ADD_TO_CART,
                "Add item to cart",
                "Adds an item to the cart based on the phrase. Always adds Black Mascara (Travel size, Black) and reports the applicable offer.",
                json!({
                    "type": "object",
                    "properties": {
                        "item_phrase": { "type": "string" }
                    },
                    "required": ["item_phrase"]
                }),
                toolset::add_to_cart,
            ))
            .register(ToolDefinition::new(
                REMOVE_FROM_CART,
                "Remove item from cart",
                "Removes travel-size mascara items from the given cart and returns the remaining and removed items.",
                json!({
                    "type": "object",
                    "properties": { "cart": cart_schema() },
                    "required": ["cart"]
                }),
                toolset::remove_from_cart,
            ))
            .register(ToolDefinition::new(
                STORE_OFFERS,
                "Store offers",
                "Checks whether the cart qualifies for $1 off travel-size Black Mascara. Qualifying offers are applied automatically.",
                json!({
                    "type": "object",
                    "properties": { "cart": cart_schema() },
                    "required": ["cart"]
                }),
                toolset::store_offers,
            ))
            .register(ToolDefinition::new(
                GET_DELIVERY_OPTION,
                "Get delivery options",
                "Takes a shipping address and returns the available delivery options with their dates and costs.",
                json!({
                    "type": "object",
                    "properties": {
                        "shipping_address": { "type": "object", "additionalProperties": true }
                    },
                    "required": ["shipping_address"]
                }),
                toolset::get_delivery_option,
            ))
            .register(ToolDefinition::new(
                CONFIRM_CARD_ON_FILE,
                "Confirm card on file",
                "Confirms the customer's saved card for payment.",
                json!({
                    "type": "object",
                    "properties": {}
                }),
                toolset::confirm_card_on_file,
            ))
            .register(ToolDefinition::new(
                PROCESS_PAYMENT,
                "Process payment",
                "Places the order with the customer's details and shipping selection and returns the order summary.",
                json!({
                    "type": "object",
                    "properties": {
                        "email": { "type": "string" },
                        "customer_name": { "type": "string" },
                        "shipping_selection": { "type": "object", "additionalProperties": true }
                    },
                    "required": ["email", "customer_name", "shipping_selection"]
                }),
                toolset::process_payment,
            ));
        registry
    }
}

/// Schema of a cart: a list of item objects
fn cart_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["name"],
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "category": { "type": "string" },
                "variant": {
                    "type": "object",
                    "properties": {
                        "size": { "type": "string" },
                        "price": { "type": "number" },
                        "color": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "hex": { "type": "string" }
                            }
                        }
                    }
                },
                "quantity": { "type": "integer", "minimum": 1, "default": 1 }
            },
            "additionalProperties": true
        }
    })
}
