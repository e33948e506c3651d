//! User-facing message strings (Russian locale).
//!
//! Clients display these verbatim. Status codes and the envelope shape carry
//! the protocol meaning; the wording can be changed freely.

pub const SERVER_RUNNING: &str = "✅ Сервер работает!";
pub const ROUTE_NOT_FOUND: &str = "Маршрут не найден";
pub const INVALID_JSON: &str = "Некорректное тело запроса";
pub const INTERNAL_ERROR: &str = "Внутренняя ошибка сервера";

// Auth
pub const REGISTER_FIELDS_REQUIRED: &str = "Заполните все обязательные поля";
pub const EMAIL_TAKEN: &str = "Пользователь с таким email уже существует";
pub const REGISTERED: &str = "Регистрация успешна!";
pub const LOGIN_FIELDS_REQUIRED: &str = "Введите email и пароль";
pub const USER_NOT_FOUND: &str = "Пользователь не найден";
pub const WRONG_PASSWORD: &str = "Неверный пароль";
pub const LOGGED_IN: &str = "Вход выполнен";

// Products
pub const PRODUCT_NOT_FOUND: &str = "Товар не найден";
pub const PRODUCT_FETCH_FAILED: &str = "Ошибка получения товара";
pub const INVALID_PRODUCT_ID: &str = "Некорректный идентификатор товара";
pub const INVALID_USER_ID: &str = "Некорректный идентификатор пользователя";

// Cart
pub const IDS_REQUIRED: &str = "Не указан userId или productId";
pub const PARAMS_REQUIRED: &str = "Не указаны параметры";
pub const CART_ITEM_ADDED: &str = "Товар добавлен в корзину";
pub const CART_ADD_FAILED: &str = "Ошибка добавления в корзину";
pub const CART_FETCH_FAILED: &str = "Ошибка получения корзины";
pub const CART_ITEM_DELETED: &str = "Товар удален";
pub const CART_QUANTITY_UPDATED: &str = "Количество обновлено";
pub const CART_UPDATE_FAILED: &str = "Ошибка обновления количества";
pub const CART_ITEM_REMOVED: &str = "Товар удален из корзины";
pub const CART_REMOVE_FAILED: &str = "Ошибка удаления из корзины";

// Favorites
pub const FAVORITE_EXISTS: &str = "Товар уже в избранном";
pub const FAVORITE_ADDED: &str = "Товар добавлен в избранное";
pub const FAVORITE_ADD_FAILED: &str = "Ошибка добавления в избранное";
pub const FAVORITES_FETCH_FAILED: &str = "Ошибка получения избранного";
pub const FAVORITE_REMOVED: &str = "Товар удален из избранного";
pub const FAVORITE_REMOVE_FAILED: &str = "Ошибка удаления из избранного";
