//! Extension points shared by all aspects and their contribution schemas.

use crate::constants::{DASHBOARD_WIDGETS, HEADER_LINKS, PRODUCT_TABS, USER_PROFILE_CARDS};
use crate::registry::{Contribution, Slot};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use typed_builder::TypedBuilder;

/// Opaque reference to a renderable component, resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(Cow<'static, str>);

impl ComponentRef {
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ComponentRef {
    fn from(key: &'static str) -> Self {
        Self::from_static(key)
    }
}

impl From<String> for ComponentRef {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Links rendered in the global header.
#[derive(Debug)]
pub enum HeaderLinks {}

impl Slot for HeaderLinks {
    const NAME: &'static str = HEADER_LINKS;
    type Contribution = NavLink;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct NavLink {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub label: String,
    #[builder(setter(into))]
    pub href: String,
    #[builder(default, setter(strip_option))]
    pub weight: Option<i32>,
}

impl Contribution for NavLink {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> Option<i32> {
        self.weight
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }
}

/// Tabs on the product detail page.
#[derive(Debug)]
pub enum ProductTabs {}

impl Slot for ProductTabs {
    const NAME: &'static str = PRODUCT_TABS;
    type Contribution = ProductTab;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct ProductTab {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub label: String,
    #[builder(setter(into))]
    pub component: ComponentRef,
    #[builder(default, setter(strip_option))]
    pub weight: Option<i32>,
}

impl Contribution for ProductTab {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> Option<i32> {
        self.weight
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }
}

/// Cards on a user's profile page.
#[derive(Debug)]
pub enum UserProfileCards {}

impl Slot for UserProfileCards {
    const NAME: &'static str = USER_PROFILE_CARDS;
    type Contribution = ProfileCard;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct ProfileCard {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub component: ComponentRef,
    #[builder(default, setter(strip_option, into))]
    pub title: Option<String>,
    #[builder(default, setter(strip_option))]
    pub weight: Option<i32>,
}

impl Contribution for ProfileCard {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> Option<i32> {
        self.weight
    }

    fn label(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Widgets on the maker dashboard grid.
#[derive(Debug)]
pub enum DashboardWidgets {}

impl Slot for DashboardWidgets {
    const NAME: &'static str = DASHBOARD_WIDGETS;
    type Contribution = DashboardWidget;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct DashboardWidget {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub component: ComponentRef,
    #[builder(default, setter(strip_option, into))]
    pub label: Option<String>,
    /// Grid columns occupied.
    #[builder(default = 1)]
    pub span: u8,
    #[builder(default, setter(strip_option))]
    pub weight: Option<i32>,
}

impl Contribution for DashboardWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> Option<i32> {
        self.weight
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
