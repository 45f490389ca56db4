use crate::commands::helpers::{next_number, search_page};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Customer, CustomerForm};
use crate::paging::Pager;
use crate::query::CustomerQuery;
use crate::store::{position, DataStore};
use crate::validation::validate_customer;
use uuid::Uuid;

fn apply(customer: &mut Customer, form: &CustomerForm) {
    customer.first_name = form.first_name.trim().to_string();
    customer.surname = form.surname.trim().to_string();
    customer.address = form.address.trim().to_string();
    customer.postcode = form.postcode.trim().to_string();
    customer.email = form.email.trim().to_string();
    customer.phone = form.phone.trim().to_string();
}

pub fn create<S: DataStore>(store: &mut S, form: &CustomerForm) -> Result<CmdResult> {
    validate_customer(form).into_result()?;

    let mut customers = store.customers().to_vec();
    let mut customer = Customer {
        id: Uuid::new_v4(),
        number: next_number(&customers),
        first_name: String::new(),
        surname: String::new(),
        address: String::new(),
        postcode: String::new(),
        email: String::new(),
        phone: String::new(),
    };
    apply(&mut customer, form);
    customers.push(customer.clone());
    store.save_customers(customers)?;
    tracing::info!(number = customer.number, "customer created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Customer created successfully."));
    result.affected_customers.push(customer);
    Ok(result)
}

pub fn modify<S: DataStore>(store: &mut S, id: &Uuid, form: &CustomerForm) -> Result<CmdResult> {
    validate_customer(form).into_result()?;

    let mut customers = store.customers().to_vec();
    let index = position(&customers, id)?;
    apply(&mut customers[index], form);
    let customer = customers[index].clone();
    store.save_customers(customers)?;
    tracing::info!(number = customer.number, "customer modified");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Customer modified successfully."));
    result.affected_customers.push(customer);
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut customers = store.customers().to_vec();
    let index = position(&customers, id)?;
    let customer = customers.remove(index);
    store.save_customers(customers)?;
    tracing::info!(number = customer.number, "customer deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer {} was deleted successfully.",
        customer.full_name()
    )));
    result.affected_customers.push(customer);
    Ok(result)
}

pub fn list<S: DataStore>(store: &S, query: &CustomerQuery, pager: &Pager) -> Result<CmdResult> {
    let (listed, page) = search_page(store.customers(), query, pager);
    let mut result = CmdResult::default().with_page(page);
    result.listed_customers = listed;
    Ok(result)
}
