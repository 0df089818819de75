//! 마이페이지 HTML 렌더링
// region:    --- Imports
use super::{BidListing, ProductListing};
use crate::market::model::User;
use std::fmt::{self, Write};
use tracing::warn;

// endregion: --- Imports

/// HTML 특수문자 이스케이프
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 상품 사진으로 렌더링할 수 있는 주소인지 확인 (상대 경로 또는 http(s))
pub fn is_safe_image_src(src: &str) -> bool {
    let src = src.trim_start();
    src.starts_with('/') || src.starts_with("https://") || src.starts_with("http://")
}

/// 사용자, 판매 상품, 입찰 내역으로 마이페이지 생성
pub fn render_user_page(
    user: &User,
    products: &[ProductListing],
    bids: &[BidListing],
) -> Result<String, fmt::Error> {
    let username = escape_html(&user.username);
    let mut html = String::new();

    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{username} - 내 경매</title>\n</head>\n<body>\n\
         <header>\n<h1>{username}</h1>\n<p class=\"email\">{}</p>\n</header>\n",
        escape_html(&user.email),
    )?;

    html.push_str("<section id=\"products\">\n<h2>판매 상품</h2>\n");
    if products.is_empty() {
        html.push_str("<p class=\"empty\">등록한 상품이 없습니다.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for product in products {
            render_product(&mut html, product)?;
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"bids\">\n<h2>입찰 내역</h2>\n");
    if bids.is_empty() {
        html.push_str("<p class=\"empty\">입찰 내역이 없습니다.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>상품</th><th>입찰가</th><th>일시</th><th>상태</th></tr></thead>\n<tbody>\n");
        for bid in bids {
            render_bid(&mut html, bid)?;
        }
        html.push_str("</tbody>\n</table>\n");
    }
    html.push_str("</section>\n</body>\n</html>\n");

    Ok(html)
}

fn render_product(html: &mut String, product: &ProductListing) -> fmt::Result {
    html.push_str("<li class=\"product\">\n");
    match product.photo.as_deref() {
        Some(photo) if is_safe_image_src(photo) => writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(photo),
            escape_html(&product.name)
        )?,
        Some(photo) => warn!("{:<12} --> 허용되지 않는 사진 주소: {:?}", "View", photo),
        None => {}
    }
    write!(
        html,
        "<a href=\"{}\">{}</a>\n<p>{}</p>\n\
         <span class=\"current-price\">{}</span>\n\
         <span class=\"bid-count\">입찰 {}건</span>\n</li>\n",
        escape_html(&product.link),
        escape_html(&product.name),
        escape_html(&product.description),
        product.current_price,
        product.bid_count,
    )
}

fn render_bid(html: &mut String, bid: &BidListing) -> fmt::Result {
    writeln!(
        html,
        "<tr class=\"bid\"><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&bid.link),
        escape_html(&bid.name),
        bid.highest_bid,
        bid.date.format("%Y-%m-%d %H:%M"),
        escape_html(&bid.status),
    )
}
