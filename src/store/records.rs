use crate::{
    dto::{farmers::FarmerForm, orders::OrderForm, products::ProductForm, users::UserForm},
    models::{Farmer, FarmerStatus, Order, OrderStatus, Product, StockStatus, User, UserStatus},
};

use super::record_list::Record;

impl Record for Farmer {
    type Form = FarmerForm;

    const ID_PREFIX: &'static str = "F";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn from_form(id: String, form: FarmerForm) -> Self {
        Farmer {
            id,
            name: form.name,
            location: form.location,
            contact: form.contact,
            products: 0,
            status: FarmerStatus::Active,
        }
    }

    fn apply_form(&mut self, form: FarmerForm) {
        self.name = form.name;
        self.location = form.location;
        self.contact = form.contact;
    }
}

impl Record for Product {
    type Form = ProductForm;

    const ID_PREFIX: &'static str = "P";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn from_form(id: String, form: ProductForm) -> Self {
        Product {
            id,
            name: form.name,
            category: form.category,
            price: form.price,
            quantity: form.quantity,
            farmer: form.farmer,
            status: StockStatus::for_quantity(form.quantity),
        }
    }

    fn apply_form(&mut self, form: ProductForm) {
        self.name = form.name;
        self.category = form.category;
        self.price = form.price;
        self.quantity = form.quantity;
        self.farmer = form.farmer;
        self.status = StockStatus::for_quantity(form.quantity);
    }
}

impl Record for Order {
    type Form = OrderForm;

    const ID_PREFIX: &'static str = "ORD-";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.id.as_str()]
    }

    fn from_form(id: String, form: OrderForm) -> Self {
        Order {
            id,
            customer: form.customer,
            farmer: form.farmer,
            total: form.total,
            date: form.date,
            status: OrderStatus::Pending,
            items: form.items.into_iter().map(Into::into).collect(),
        }
    }

    fn apply_form(&mut self, form: OrderForm) {
        self.customer = form.customer;
        self.farmer = form.farmer;
        self.total = form.total;
        self.date = form.date;
        self.items = form.items.into_iter().map(Into::into).collect();
    }
}

impl Record for User {
    type Form = UserForm;

    const ID_PREFIX: &'static str = "U";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn from_form(id: String, form: UserForm) -> Self {
        User {
            id,
            name: form.name,
            email: form.email,
            role: form.role,
            status: UserStatus::Active,
        }
    }

    fn apply_form(&mut self, form: UserForm) {
        self.name = form.name;
        self.email = form.email;
        self.role = form.role;
    }
}
