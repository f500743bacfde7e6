//! Descriptor of `order.proto`, matching the messages in [`super::pb`].

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
};

const PACKAGE: &str = "pb";

/// The descriptor set registered with the reflection service.
pub fn file_descriptor_set() -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![order_proto()],
    }
}

fn order_proto() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("order.proto".to_string()),
        package: Some(PACKAGE.to_string()),
        message_type: vec![
            message(
                "CreateOrderRequest",
                vec![
                    scalar("id", 1, Type::String),
                    scalar("price", 2, Type::Double),
                    scalar("tax", 3, Type::Double),
                ],
            ),
            message(
                "OrderResponse",
                vec![
                    scalar("id", 1, Type::String),
                    scalar("price", 2, Type::Double),
                    scalar("tax", 3, Type::Double),
                    scalar("final_price", 4, Type::Double),
                ],
            ),
            message("ListOrdersRequest", Vec::new()),
            message(
                "OrderList",
                vec![FieldDescriptorProto {
                    label: Some(Label::Repeated as i32),
                    r#type: Some(Type::Message as i32),
                    type_name: Some(qualified("OrderResponse")),
                    ..scalar("orders", 1, Type::Message)
                }],
            ),
        ],
        service: vec![ServiceDescriptorProto {
            name: Some("OrderService".to_string()),
            method: vec![
                method("CreateOrder", "CreateOrderRequest", "OrderResponse"),
                method("ListOrders", "ListOrdersRequest", "OrderList"),
            ],
            ..Default::default()
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

fn message(name: &str, field: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field,
        ..Default::default()
    }
}

fn scalar(name: &str, number: i32, kind: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(kind as i32),
        json_name: Some(json_name(name)),
        ..Default::default()
    }
}

fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(qualified(input)),
        output_type: Some(qualified(output)),
        ..Default::default()
    }
}

fn qualified(message: &str) -> String {
    format!(".{PACKAGE}.{message}")
}

/// `final_price` -> `finalPrice`, as protoc derives it.
fn json_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
