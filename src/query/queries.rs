/// 판매자 상품 조회 (입찰 없는 상품도 포함)
pub const GET_PRODUCTS_BY_SELLER: &str = r#"
    SELECT p.id, p.name, p.description, p.photo, p.starting_price,
           MAX(b.amount) AS highest_bid,
           COUNT(b.id) AS bid_count
    FROM products p
    LEFT JOIN bids b ON b.product_id = p.id
    WHERE p.seller_id = $1
    GROUP BY p.id
    ORDER BY p.id
"#;

/// 사용자 입찰 조회
pub const GET_BIDS_BY_USER: &str = r#"
    SELECT b.id, b.product_id, p.name AS product_name, b.amount, b.status, b.created_at
    FROM bids b
    JOIN products p ON p.id = b.product_id
    WHERE b.user_id = $1
    ORDER BY b.id
"#;

/// 사용자 조회
pub const GET_USER: &str = "SELECT id, username, email FROM users WHERE id = $1";
