//! SAT `c_Moneda`: ISO 4217 currency codes.

/// Sorted by code for binary search.
pub(super) static CURRENCY_CODES: &[(&str, &str)] = &[
    ("AED", "Dirham de EAU"),
    ("AFN", "Afghani"),
    ("ALL", "Lek"),
    ("AMD", "Dram armenio"),
    ("ANG", "Florín antillano neerlandés"),
    ("AOA", "Kwanza"),
    ("ARS", "Peso Argentino"),
    ("AUD", "Dólar Australiano"),
    ("AWG", "Aruba Florin"),
    ("AZN", "Azerbaijanian Manat"),
    ("BAM", "Convertibles marca"),
    ("BBD", "Dólar de Barbados"),
    ("BDT", "Taka"),
    ("BGN", "Lev búlgaro"),
    ("BHD", "Dinar de Bahrein"),
    ("BIF", "Burundi Franc"),
    ("BMD", "Dólar de Bermudas"),
    ("BND", "Dólar de Brunei"),
    ("BOB", "Boliviano"),
    ("BOV", "Mvdol"),
    ("BRL", "Real brasileño"),
    ("BSD", "Dólar de las Bahamas"),
    ("BTN", "Ngultrum"),
    ("BWP", "Pula"),
    ("BYR", "Rublo bielorruso"),
    ("BZD", "Dólar de Belice"),
    ("CAD", "Dólar Canadiense"),
    ("CDF", "Franco congoleño"),
    ("CHE", "WIR Euro"),
    ("CHF", "Franco Suizo"),
    ("CHW", "Franc WIR"),
    ("CLF", "Unidad de Fomento"),
    ("CLP", "Peso chileno"),
    ("CNY", "Yuan Renminbi"),
    ("COP", "Peso Colombiano"),
    ("COU", "Unidad de Valor real"),
    ("CRC", "Colón costarricense"),
    ("CUC", "Peso Convertible"),
    ("CUP", "Peso Cubano"),
    ("CVE", "Cabo Verde Escudo"),
    ("CZK", "Corona checa"),
    ("DJF", "Franco de Djibouti"),
    ("DKK", "Corona danesa"),
    ("DOP", "Peso Dominicano"),
    ("DZD", "Dinar argelino"),
    ("EGP", "Libra egipcia"),
    ("ERN", "Nakfa"),
    ("ETB", "Birr etíope"),
    ("EUR", "Euro"),
    ("FJD", "Dólar de Fiji"),
    ("FKP", "Libra malvinense"),
    ("GBP", "Libra Esterlina"),
    ("GEL", "Lari"),
    ("GHS", "Cedi de Ghana"),
    ("GIP", "Libra de Gibraltar"),
    ("GMD", "Dalasi"),
    ("GNF", "Franco guineano"),
    ("GTQ", "Quetzal"),
    ("GYD", "Dólar guyanés"),
    ("HKD", "Dólar De Hong Kong"),
    ("HNL", "Lempira"),
    ("HRK", "Kuna"),
    ("HTG", "Gourde"),
    ("HUF", "Florín"),
    ("IDR", "Rupia"),
    ("ILS", "Nuevo Shekel Israelí"),
    ("INR", "Rupia india"),
    ("IQD", "Dinar iraquí"),
    ("IRR", "Rial iraní"),
    ("ISK", "Corona islandesa"),
    ("JMD", "Dólar Jamaiquino"),
    ("JOD", "Dinar jordano"),
    ("JPY", "Yen"),
    ("KES", "Chelín keniano"),
    ("KGS", "Som"),
    ("KHR", "Riel"),
    ("KMF", "Franco Comoro"),
    ("KPW", "Corea del Norte ganó"),
    ("KRW", "Won"),
    ("KWD", "Dinar kuwaití"),
    ("KYD", "Dólar de las Islas Caimán"),
    ("KZT", "Tenge"),
    ("LAK", "Kip"),
    ("LBP", "Libra libanesa"),
    ("LKR", "Rupia de Sri Lanka"),
    ("LRD", "Dólar liberiano"),
    ("LSL", "Loti"),
    ("LYD", "Dinar libio"),
    ("MAD", "Dirham marroquí"),
    ("MDL", "Leu moldavo"),
    ("MGA", "Ariary malgache"),
    ("MKD", "Denar"),
    ("MMK", "Kyat"),
    ("MNT", "Tugrik"),
    ("MOP", "Pataca"),
    ("MRO", "Ouguiya"),
    ("MUR", "Rupia de Mauricio"),
    ("MVR", "Rupia"),
    ("MWK", "Kwacha"),
    ("MXN", "Peso Mexicano"),
    ("MXV", "México Unidad de Inversión (UDI)"),
    ("MYR", "Ringgit malayo"),
    ("MZN", "Mozambique Metical"),
    ("NAD", "Dólar de Namibia"),
    ("NGN", "Naira"),
    ("NIO", "Córdoba Oro"),
    ("NOK", "Corona noruega"),
    ("NPR", "Rupia nepalí"),
    ("NZD", "Dólar de Nueva Zelanda"),
    ("OMR", "Rial omaní"),
    ("PAB", "Balboa"),
    ("PEN", "Nuevo Sol"),
    ("PGK", "Kina"),
    ("PHP", "Peso filipino"),
    ("PKR", "Rupia de Pakistán"),
    ("PLN", "Zloty"),
    ("PYG", "Guaraní"),
    ("QAR", "Qatar Rial"),
    ("RON", "Leu rumano"),
    ("RSD", "Dinar serbio"),
    ("RUB", "Rublo ruso"),
    ("RWF", "Franco ruandés"),
    ("SAR", "Riyal saudí"),
    ("SBD", "Dólar de las Islas Salomón"),
    ("SCR", "Rupia de Seychelles"),
    ("SDG", "Libra sudanesa"),
    ("SEK", "Corona sueca"),
    ("SGD", "Dólar De Singapur"),
    ("SHP", "Libra de Santa Helena"),
    ("SLL", "Leona"),
    ("SOS", "Chelín somalí"),
    ("SRD", "Dólar de Suriname"),
    ("SSP", "Libra sudanesa Sur"),
    ("STD", "Dobra"),
    ("SVC", "Colon El Salvador"),
    ("SYP", "Libra Siria"),
    ("SZL", "Lilangeni"),
    ("THB", "Baht"),
    ("TJS", "Somoni"),
    ("TMT", "Turkmenistán nuevo manat"),
    ("TND", "Dinar tunecino"),
    ("TOP", "Pa'anga"),
    ("TRY", "Lira turca"),
    ("TTD", "Dólar de Trinidad y Tobago"),
    ("TWD", "Nuevo dólar de Taiwán"),
    ("TZS", "Shilling tanzano"),
    ("UAH", "Hryvnia"),
    ("UGX", "Shilling de Uganda"),
    ("USD", "Dólar americano"),
    ("USN", "Dólar estadounidense (día siguiente)"),
    ("UYI", "Peso Uruguay en Unidades Indexadas (URUIURUI)"),
    ("UYU", "Peso Uruguayo"),
    ("UZS", "Uzbekistán Sum"),
    ("VEF", "Bolívar"),
    ("VND", "Dong"),
    ("VUV", "Vatu"),
    ("WST", "Tala"),
    ("XAF", "Franco CFA BEAC"),
    ("XAG", "Plata"),
    ("XAU", "Oro"),
    ("XBA", "Unidad de Mercados de Bonos Unidad Europea Composite (EURCO)"),
    ("XBB", "Unidad Monetaria de Bonos de Mercados Unidad Europea (UEM-6)"),
    ("XBC", "Mercados de Bonos Unidad Europea unidad de cuenta a 9 (UCE-9)"),
    ("XBD", "Mercados de Bonos Unidad Europea unidad de cuenta a 17 (UCE-17)"),
    ("XCD", "Dólar del Caribe Oriental"),
    ("XDR", "DEG (Derechos Especiales de Giro)"),
    ("XOF", "Franco CFA BCEAO"),
    ("XPD", "Paladio"),
    ("XPF", "Franco CFP"),
    ("XPT", "Platino"),
    ("XSU", "Sucre"),
    ("XTS", "Códigos reservados específicamente para propósitos de prueba"),
    ("XUA", "Unidad ADB de Cuenta"),
    ("XXX", "Los códigos asignados para las transacciones en que intervenga ninguna moneda"),
    ("YER", "Rial yemení"),
    ("ZAR", "Rand"),
    ("ZMW", "Kwacha zambiano"),
    ("ZWL", "Zimbabwe Dólar"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_sorted() {
        for window in CURRENCY_CODES.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
    }
}
