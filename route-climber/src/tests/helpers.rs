//! Shared fixtures

use crate::{ClimberConfig, HandlerInfo, MiddlewareDescriptor, RouteTable, Router, structure};

pub fn middleware1() -> HandlerInfo {
    HandlerInfo::named("middleware1")
}

pub fn middleware2() -> HandlerInfo {
    HandlerInfo::named("middleware2")
}

pub fn middleware3() -> HandlerInfo {
    HandlerInfo::named("middleware3")
}

pub fn get_foo_handle() -> HandlerInfo {
    HandlerInfo::named("getFooHandle")
}

pub fn post_foo_handle() -> HandlerInfo {
    HandlerInfo::named("postFooHandle")
}

pub fn delete_bar_handle() -> HandlerInfo {
    HandlerInfo::named("deleteBarHandle")
}

pub fn data(name: &str) -> MiddlewareDescriptor {
    MiddlewareDescriptor::named(name)
}

pub fn extract(router: &Router) -> RouteTable {
    structure(router, &ClimberConfig::default())
}

pub fn names(descriptors: &[MiddlewareDescriptor]) -> Vec<&str> {
    descriptors.iter().map(|d| d.name.as_str()).collect()
}
