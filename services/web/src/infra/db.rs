use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, JoinType, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait, sea_query::Expr,
};

use cafehop_core::sea_ext::OrderByRandom;
use cafehop_domain::role::CustomerRole;
use cafehop_web_schema::{cafe_menu_items, cafes, cart_items, customers, menu_items};

use crate::domain::repository::{
    CafeRepository, CartRepository, CustomerRepository, MenuRepository,
};
use crate::domain::types::{
    Cafe, CartLine, Customer, MenuItem, NewCafe, NewCustomer, NewMenuItem,
};
use crate::error::WebServiceError;

// ── Cafe repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCafeRepository {
    pub db: DatabaseConnection,
}

impl CafeRepository for DbCafeRepository {
    async fn list(&self) -> Result<Vec<Cafe>, WebServiceError> {
        let models = cafes::Entity::find()
            .order_by_asc(cafes::Column::Id)
            .all(&self.db)
            .await
            .context("list cafes")?;
        Ok(models.into_iter().map(cafe_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Cafe>, WebServiceError> {
        let model = cafes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find cafe by id")?;
        Ok(model.map(cafe_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, WebServiceError> {
        let model = cafes::Entity::find()
            .filter(cafes::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find cafe by name")?;
        Ok(model.map(cafe_from_model))
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, WebServiceError> {
        let models = cafes::Entity::find()
            .filter(cafes::Column::Location.eq(location))
            .order_by_asc(cafes::Column::Id)
            .all(&self.db)
            .await
            .context("find cafes by location")?;
        Ok(models.into_iter().map(cafe_from_model).collect())
    }

    async fn random(&self) -> Result<Option<Cafe>, WebServiceError> {
        let model = cafes::Entity::find()
            .order_by_random()
            .one(&self.db)
            .await
            .context("pick random cafe")?;
        Ok(model.map(cafe_from_model))
    }

    async fn create(&self, cafe: &NewCafe) -> Result<Cafe, WebServiceError> {
        let model = cafes::ActiveModel {
            name: Set(cafe.name.clone()),
            map_url: Set(cafe.map_url.clone()),
            img_url: Set(cafe.img_url.clone()),
            location: Set(cafe.location.clone()),
            has_sockets: Set(cafe.has_sockets),
            has_toilet: Set(cafe.has_toilet),
            has_wifi: Set(cafe.has_wifi),
            can_take_calls: Set(cafe.can_take_calls),
            seats: Set(cafe.seats.clone()),
            coffee_price: Set(cafe.coffee_price.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create cafe")?;
        Ok(cafe_from_model(model))
    }

    async fn update_coffee_price(&self, id: i32, price: &str) -> Result<bool, WebServiceError> {
        let result = cafes::Entity::update_many()
            .col_expr(cafes::Column::CoffeePrice, Expr::value(price.to_owned()))
            .filter(cafes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update coffee price")?;
        Ok(result.rows_affected > 0)
    }
}

fn cafe_from_model(model: cafes::Model) -> Cafe {
    Cafe {
        id: model.id,
        name: model.name,
        map_url: model.map_url,
        img_url: model.img_url,
        location: model.location,
        has_sockets: model.has_sockets,
        has_toilet: model.has_toilet,
        has_wifi: model.has_wifi,
        can_take_calls: model.can_take_calls,
        seats: model.seats,
        coffee_price: model.coffee_price,
    }
}

// ── Menu repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMenuRepository {
    pub db: DatabaseConnection,
}

impl MenuRepository for DbMenuRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, WebServiceError> {
        let model = menu_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find menu item by id")?;
        Ok(model.map(menu_item_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, WebServiceError> {
        let model = menu_items::Entity::find()
            .filter(menu_items::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find menu item by name")?;
        Ok(model.map(menu_item_from_model))
    }

    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, WebServiceError> {
        let model = menu_items::ActiveModel {
            name: Set(item.name.clone()),
            img_url: Set(item.img_url.clone()),
            price: Set(item.price),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create menu item")?;
        Ok(menu_item_from_model(model))
    }

    async fn list_for_cafe(&self, cafe_id: i32) -> Result<Vec<MenuItem>, WebServiceError> {
        let models = menu_items::Entity::find()
            .join(
                JoinType::InnerJoin,
                menu_items::Relation::CafeMenuItems.def(),
            )
            .filter(cafe_menu_items::Column::CafeId.eq(cafe_id))
            .order_by_asc(cafe_menu_items::Column::Id)
            .all(&self.db)
            .await
            .context("list menu items for cafe")?;
        Ok(models.into_iter().map(menu_item_from_model).collect())
    }

    async fn is_linked(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError> {
        let count = cafe_menu_items::Entity::find()
            .filter(cafe_menu_items::Column::CafeId.eq(cafe_id))
            .filter(cafe_menu_items::Column::MenuItemId.eq(item_id))
            .count(&self.db)
            .await
            .context("check cafe menu link")?;
        Ok(count > 0)
    }

    async fn link(&self, cafe_id: i32, item_id: i32) -> Result<(), WebServiceError> {
        cafe_menu_items::ActiveModel {
            cafe_id: Set(cafe_id),
            menu_item_id: Set(item_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("link menu item to cafe")?;
        Ok(())
    }

    async fn unlink(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError> {
        let link = cafe_menu_items::Entity::find()
            .filter(cafe_menu_items::Column::CafeId.eq(cafe_id))
            .filter(cafe_menu_items::Column::MenuItemId.eq(item_id))
            .order_by_asc(cafe_menu_items::Column::Id)
            .one(&self.db)
            .await
            .context("find cafe menu link")?;
        let Some(link) = link else {
            return Ok(false);
        };
        let result = link
            .delete(&self.db)
            .await
            .context("unlink menu item from cafe")?;
        Ok(result.rows_affected > 0)
    }
}

fn menu_item_from_model(model: menu_items::Model) -> MenuItem {
    MenuItem {
        id: model.id,
        name: model.name,
        img_url: model.img_url,
        price: model.price,
    }
}

// ── Customer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, WebServiceError> {
        let model = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find customer by id")?;
        Ok(model.map(customer_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, WebServiceError> {
        let model = customers::Entity::find()
            .filter(customers::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find customer by email")?;
        Ok(model.map(customer_from_model))
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, WebServiceError> {
        let txn = self.db.begin().await.context("begin customer insert")?;
        // SHARE ROW EXCLUSIVE conflicts with itself, so concurrent registrations
        // serialize between the count and the insert.
        txn.execute_unprepared("LOCK TABLE customers IN SHARE ROW EXCLUSIVE MODE")
            .await
            .context("lock customers")?;
        let existing = customers::Entity::find()
            .count(&txn)
            .await
            .context("count customers")?;
        let role = CustomerRole::for_new_account(existing);
        let model = customers::ActiveModel {
            name: Set(customer.name.clone()),
            email: Set(customer.email.clone()),
            password: Set(customer.password_hash.clone()),
            address: Set(customer.address.clone()),
            role: Set(i16::from(role.as_u8())),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("create customer")?;
        txn.commit().await.context("commit customer insert")?;
        Ok(customer_from_model(model))
    }
}

fn customer_from_model(model: customers::Model) -> Customer {
    let role = u8::try_from(model.role)
        .ok()
        .and_then(CustomerRole::from_u8)
        .unwrap_or(CustomerRole::Customer);
    Customer {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password,
        address: model.address,
        role,
        created_at: model.created_at,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn add(&self, customer_id: i32, menu_item_id: i32) -> Result<(), WebServiceError> {
        cart_items::ActiveModel {
            customer_id: Set(customer_id),
            original_item_id: Set(menu_item_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("add cart item")?;
        Ok(())
    }

    async fn list(&self, customer_id: i32) -> Result<Vec<CartLine>, WebServiceError> {
        let rows = cart_items::Entity::find()
            .filter(cart_items::Column::CustomerId.eq(customer_id))
            .order_by_asc(cart_items::Column::ItemId)
            .find_also_related(menu_items::Entity)
            .all(&self.db)
            .await
            .context("list cart items")?;
        // The foreign key guarantees a menu item for every row.
        Ok(rows
            .into_iter()
            .filter_map(|(row, item)| {
                item.map(|item| CartLine {
                    item_id: row.item_id,
                    menu_item: menu_item_from_model(item),
                })
            })
            .collect())
    }

    async fn clear(&self, customer_id: i32) -> Result<u64, WebServiceError> {
        let result = cart_items::Entity::delete_many()
            .filter(cart_items::Column::CustomerId.eq(customer_id))
            .exec(&self.db)
            .await
            .context("clear cart")?;
        Ok(result.rows_affected)
    }
}
